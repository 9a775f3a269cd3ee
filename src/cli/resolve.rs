use crate::cli::commands::Cli;
use crate::error::VersionerError;
use crate::git::GitCli;
use crate::output;
use crate::version;

pub fn run(cli: &Cli) -> i32 {
    let result = run_inner(cli);
    match result {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                print_json(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(cli: &Cli) -> Result<i32, VersionerError> {
    let mut git = GitCli::new().program(cli.git.as_str());
    if let Some(ref dir) = cli.repo {
        git = git.repo(dir);
    }

    let resolution = version::resolve(&git)?;

    if cli.json {
        print_json(&output::json::success(output::json::resolution_json(&resolution)));
    } else {
        output::text::print_resolution(&resolution);
    }
    Ok(0)
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
