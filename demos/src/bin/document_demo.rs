// Example demonstrating the document API

use picoini::Document;

fn main() {
    let ini_content = "\n[section1]\n  key1 = value1  \nkey2=value2\n;\n\
                       ; Regular comment\n[section2]\nkeyA=valueA\nemptyKey=\n";

    let doc = match Document::parse(ini_content) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Initialization failed: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Section1 exists: {}",
        if doc.has_section("section1") { "Yes" } else { "No" }
    );
    println!(
        "Section3 exists: {}",
        if doc.has_section("section3") { "Yes" } else { "No" }
    );

    if let Some(value) = doc.get_value("section1", "key1") {
        println!("section1.key1 = '{value}'");
    }

    println!(
        "emptyKey has value: {}",
        if doc.has_value("section2", "emptyKey") { "Yes" } else { "No" }
    );
}
