// Interactive command loop against an open volume session.

use log::debug;
use ntfsutils_core::{EntryKind, NtfsUtilsError, VolumeOps};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "ls - show working directory elements\n\
cd [directory] - change working directory\n\
pwd - print working directory\n\
cp [directory] [target directory] - copy dir or file from file system\n\
help - list of commands\n\
exit - terminate";

/// One parsed input line. Argument arity for `cd` and `cp` is checked at
/// dispatch so the three `cp` shapes report their distinct messages.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Exit,
    Help,
    Ls { path: String },
    Pwd,
    Cd { path: Option<String> },
    Cp {
        from_path: Option<String>,
        to_path: Option<String>,
    },
    Unknown,
    Empty,
}

fn parse(line: &str) -> ShellCommand {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return ShellCommand::Empty;
    };
    match name {
        "exit" => ShellCommand::Exit,
        "help" => ShellCommand::Help,
        "pwd" => ShellCommand::Pwd,
        "ls" => ShellCommand::Ls {
            path: tokens.next().unwrap_or(".").to_string(),
        },
        "cd" => ShellCommand::Cd {
            path: tokens.next().map(str::to_string),
        },
        "cp" => ShellCommand::Cp {
            from_path: tokens.next().map(str::to_string),
            to_path: tokens.next().map(str::to_string),
        },
        _ => ShellCommand::Unknown,
    }
}

/// Runs the command loop until `exit` or end of input.
///
/// Every per-command problem is rendered as output and the loop continues;
/// only console I/O failure propagates.
pub fn run<V, R, W>(volume: &mut V, mut input: R, mut out: W) -> Result<(), NtfsUtilsError>
where
    V: VolumeOps,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        let cwd = volume.pwd().unwrap_or_else(|e| {
            debug!("pwd failed for prompt: {}", e);
            String::new()
        });
        write!(out, "{} > ", cwd)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving shell");
            break;
        }

        match parse(&line) {
            ShellCommand::Exit => break,
            ShellCommand::Empty => continue,
            ShellCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ShellCommand::Pwd => match volume.pwd() {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ShellCommand::Ls { path } => match volume.ls(&path) {
                Ok(entries) => {
                    for entry in entries {
                        match entry.kind {
                            EntryKind::Directory => writeln!(out, "Dir: {}", entry.name)?,
                            EntryKind::File => writeln!(out, "File: {}", entry.name)?,
                        }
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            ShellCommand::Cd { path: None } => {
                writeln!(out, "cd command require path argument")?;
            }
            ShellCommand::Cd { path: Some(path) } => match volume.cd(&path) {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ShellCommand::Cp {
                from_path: None, ..
            } => {
                writeln!(out, "cp command requires \"path\" and \"out_path\" arguments")?;
            }
            ShellCommand::Cp {
                to_path: None, ..
            } => {
                writeln!(out, "cp command requires \"out_path\" argument")?;
            }
            ShellCommand::Cp {
                from_path: Some(from_path),
                to_path: Some(to_path),
            } => match volume.cp(&from_path, &to_path) {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ShellCommand::Unknown => {
                writeln!(out, "wrong command. Enter \"help\" to get more information")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntfsutils_core::test_utils::MockVolume;
    use ntfsutils_core::DirectoryEntry;
    use std::io::Cursor;

    fn run_script(volume: &mut MockVolume, script: &str) -> String {
        let mut out = Vec::new();
        run(volume, Cursor::new(script.to_string()), &mut out).expect("shell loop failed");
        String::from_utf8(out).expect("shell output was not UTF-8")
    }

    #[test]
    fn test_parse_splits_name_and_arguments() {
        assert_eq!(parse("pwd\n"), ShellCommand::Pwd);
        assert_eq!(
            parse("ls docs\n"),
            ShellCommand::Ls {
                path: "docs".to_string()
            }
        );
        assert_eq!(
            parse("cp a b\n"),
            ShellCommand::Cp {
                from_path: Some("a".to_string()),
                to_path: Some("b".to_string()),
            }
        );
        assert_eq!(parse("\n"), ShellCommand::Empty);
        assert_eq!(parse("foo\n"), ShellCommand::Unknown);
    }

    #[test]
    fn test_ls_defaults_to_the_current_directory() {
        let mut volume = MockVolume::new("/");
        run_script(&mut volume, "ls\nexit\n");
        assert_eq!(volume.command_calls(), vec!["ls ."]);
    }

    #[test]
    fn test_ls_renders_entries_in_driver_order() {
        let mut volume = MockVolume::new("/").with_listing(
            "docs",
            vec![
                DirectoryEntry::new("a.txt", EntryKind::File),
                DirectoryEntry::new("sub", EntryKind::Directory),
            ],
        );
        let output = run_script(&mut volume, "ls docs\nexit\n");
        let lines: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("File:") || l.starts_with("Dir:"))
            .collect();
        assert_eq!(lines, vec!["File: a.txt", "Dir: sub"]);
    }

    #[test]
    fn test_ls_on_empty_directory_renders_no_lines() {
        let mut volume = MockVolume::new("/").with_listing("empty", Vec::new());
        let output = run_script(&mut volume, "ls empty\nexit\n");
        assert!(!output.contains("File:"));
        assert!(!output.contains("Dir:"));
        assert_eq!(volume.command_calls(), vec!["ls empty"]);
    }

    #[test]
    fn test_cd_without_argument_reports_and_skips_the_driver() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "cd\nexit\n");
        assert!(output.contains("cd command require path argument"));
        assert!(volume.command_calls().is_empty());
    }

    #[test]
    fn test_cd_with_argument_prints_driver_response() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "cd docs\nexit\n");
        assert!(output.contains("changed to docs"));
        assert_eq!(volume.command_calls(), vec!["cd docs"]);
    }

    #[test]
    fn test_cp_argument_shapes_report_three_distinct_outcomes() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "cp\nexit\n");
        assert!(output.contains("cp command requires \"path\" and \"out_path\" arguments"));
        assert!(volume.command_calls().is_empty());

        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "cp a.txt\nexit\n");
        assert!(output.contains("cp command requires \"out_path\" argument"));
        assert!(volume.command_calls().is_empty());

        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "cp a.txt /tmp/a.txt\nexit\n");
        assert!(output.contains("copied a.txt to /tmp/a.txt"));
        assert_eq!(volume.command_calls(), vec!["cp a.txt /tmp/a.txt"]);
    }

    #[test]
    fn test_unknown_command_prints_guidance_without_driver_calls() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "foo\nexit\n");
        assert!(output.contains("wrong command. Enter \"help\" to get more information"));
        assert!(volume.command_calls().is_empty());
    }

    #[test]
    fn test_empty_lines_are_no_op_iterations() {
        let mut volume = MockVolume::new("/");
        run_script(&mut volume, "\n   \nexit\n");
        assert!(volume.command_calls().is_empty());
    }

    #[test]
    fn test_help_is_local_and_lists_every_command() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "help\nexit\n");
        assert!(output.contains("ls - show working directory elements"));
        assert!(output.contains("exit - terminate"));
        assert!(volume.command_calls().is_empty());
    }

    #[test]
    fn test_end_of_input_terminates_the_loop() {
        let mut volume = MockVolume::new("/");
        let output = run_script(&mut volume, "");
        assert!(output.starts_with("/ > "));
    }

    #[test]
    fn test_prompt_shows_the_working_directory() {
        let mut volume = MockVolume::new("/docs");
        let output = run_script(&mut volume, "exit\n");
        assert!(output.starts_with("/docs > "));
    }

    #[test]
    fn test_failing_pwd_renders_an_empty_prompt() {
        let mut volume = MockVolume::new("/");
        volume.fail_pwd = true;
        let output = run_script(&mut volume, "exit\n");
        assert!(output.starts_with(" > "));
    }

    #[test]
    fn test_pwd_command_prints_the_working_directory() {
        let mut volume = MockVolume::new("/docs");
        let output = run_script(&mut volume, "pwd\nexit\n");
        assert!(output.contains("/docs\n"));
    }
}
