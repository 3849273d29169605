// Example demonstrating the streaming API: collect events into owned
// state, including errors from a deliberately malformed line

use picoini::{dispatch, Dispatch, StreamEvent};

#[derive(Default)]
struct ParserState {
    sections: Vec<(String, Vec<(String, String)>)>,
    comments: Vec<String>,
    errors: Vec<String>,
}

fn main() {
    let ini_content = "; Main configuration file\n[network]\nhost = 127.0.0.1\n\
                       port = 8080\n[database]\nuser = admin\npass = secret\n\
                       [invalid_section\nkey = value\n";

    let mut state = ParserState::default();
    let result = dispatch(ini_content, |event| {
        match event {
            StreamEvent::Section { name } => {
                state.sections.push((name.to_string(), Vec::new()));
            }
            StreamEvent::KeyValue { key, value, .. } => {
                if let Some((_, entries)) = state.sections.last_mut() {
                    entries.push((key.to_string(), value.to_string()));
                }
            }
            StreamEvent::Comment { raw } => state.comments.push(raw.to_string()),
            StreamEvent::Error { raw } => state.errors.push(raw.to_string()),
        }
        true
    });

    println!(
        "Parsing {}\n",
        if result == Dispatch::Completed { "completed" } else { "aborted" }
    );

    println!("Comments ({}):", state.comments.len());
    for comment in &state.comments {
        println!("  {comment}");
    }

    println!("\nErrors ({}):", state.errors.len());
    for error in &state.errors {
        println!("  {error}");
    }

    println!("\nParsed data:");
    for (section, entries) in &state.sections {
        println!("[{section}]");
        for (key, value) in entries {
            println!("  {key} = {value}");
        }
    }
}
