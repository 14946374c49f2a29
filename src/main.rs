//! Interactive console front end over the dirseek query functions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;

use dirseek::{
    find_all_directories, find_all_files, find_files_by_last_change, find_files_by_pattern,
    SearchError,
};

const DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!("-----------File search app-----------");
    let mut root: Option<String> = None;

    loop {
        let dir = match &root {
            Some(dir) => dir.clone(),
            None => {
                println!("Please specify a root directory you want to examine (absolute path): ");
                println!("Example: \"/home/user/projects\"");
                let Some(line) = read_line(&mut input) else {
                    return;
                };
                root = Some(line.clone());
                line
            }
        };

        print_menu();
        let Some(choice) = read_line(&mut input) else {
            return;
        };

        let result = match choice.trim().parse::<u32>() {
            Ok(1) => find_all_files(&dir),
            Ok(2) => find_all_directories(&dir),
            Ok(3) => {
                println!("? - any single character");
                println!("* - any character sequence");
                println!("Specify pattern: ");
                let Some(pattern) = read_line(&mut input) else {
                    return;
                };
                find_files_by_pattern(&pattern, &dir)
            }
            Ok(4) => {
                println!("Format: MM/dd/yyyy HH:mm");
                println!("Specify date and time:");
                let Some(line) = read_line(&mut input) else {
                    return;
                };
                let Ok(after) = NaiveDateTime::parse_from_str(line.trim(), DATE_FORMAT) else {
                    println!("Invalid date and time!");
                    continue;
                };
                find_files_by_last_change(after, &dir)
            }
            Ok(5) => {
                root = None;
                continue;
            }
            _ => {
                println!("Incorrect option, try again!");
                continue;
            }
        };

        match result {
            Ok(paths) => print_results(&paths),
            Err(SearchError::DirectoryNotFound(_)) => {
                println!("Invalid directory pathname");
                root = None;
            }
            Err(err) => println!("{err}"),
        }
    }
}

/// One line from stdin, or `None` once the stream is closed or unreadable.
fn read_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    input.next()?.ok()
}

fn print_menu() {
    println!("-(1) Print all files in root directory");
    println!("-(2) Print all directories in root directory");
    println!("-(3) Print files in root directory that match a pattern");
    println!("-(4) Print files in root directory that were last modified after specified date and time");
    println!("-(5) Change root directory");
    print!("Your choice(1/2/3/4/5): ");
    let _ = io::stdout().flush();
}

/// Print matches as a numbered list, one per line, 1-indexed.
fn print_results(paths: &[PathBuf]) {
    for (i, path) in paths.iter().enumerate() {
        println!("{}. {}", i + 1, path.display());
    }
}
