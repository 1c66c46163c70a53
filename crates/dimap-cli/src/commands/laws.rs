use crate::support::print_json_or_exit;
use dimap_laws::catalogue;

pub fn run(json_output: bool) {
    let entries = catalogue();
    if json_output {
        print_json_or_exit(&entries, "law catalogue");
        return;
    }
    println!("dimap laws");
    for entry in entries {
        println!(
            "  {:<10} {:<24} {}",
            entry.law_ref,
            entry.id.as_str(),
            entry.statement
        );
    }
}
