use clap::{Parser, Subcommand};
use ntfsutils_core::NtfsUtilsError;
use ntfsutils_driver::{NtfsDriver, Session};

mod shell;

#[derive(Parser)]
#[command(name = "ntfsutils")]
#[command(about = "Interactive client for NTFS volumes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the list of devices and partitions
    List,
    /// Open an interactive shell on a device image
    Shell {
        /// Device or image path
        device: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let driver = NtfsDriver::load()?;
            driver.print_device()?;
        }
        Commands::Shell { device } => {
            let driver = NtfsDriver::load()?;
            match Session::open(driver, &device) {
                Ok(mut session) => {
                    println!("NTFS filesystem detected");
                    let stdin = std::io::stdin();
                    let stdout = std::io::stdout();
                    shell::run(&mut session, stdin.lock(), stdout.lock())?;
                }
                Err(NtfsUtilsError::NotDetected(_)) => {
                    println!("Filesystem is not detected");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
