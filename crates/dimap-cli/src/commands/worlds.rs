use crate::support::print_json_or_exit;
use dimap_laws::WorldId;
use serde_json::json;

pub fn run(json_output: bool) {
    if json_output {
        let rows: Vec<_> = WorldId::ALL
            .into_iter()
            .map(|world| json!({"id": world.as_str(), "description": world.description()}))
            .collect();
        print_json_or_exit(&rows, "world list");
        return;
    }
    println!("dimap worlds");
    for world in WorldId::ALL {
        println!("  {:<14} {}", world.as_str(), world.description());
    }
}
