use suffixdex::{IndexConfig, StructureKind, windows};

fn main() {
    // This example splits a longer sequence into windows that are indexed and searched in parallel.

    let text = b"ACATACTAGATCCACCAGGTACCATTAGACCATAGATTACAGGATCA";
    let queries = [b"AA".as_slice(), b"AGTCCAG", b"GATTACA"];

    let results = windows::longest_prefix_matches_per_window(
        text,
        16,
        StructureKind::Tree,
        &IndexConfig::default(),
        &queries,
    );

    for window_matches in results {
        println!(
            "window starting at {}: {:?}",
            window_matches.start, window_matches.matches
        );
    }

    let best =
        windows::best_prefix_matches(text, 16, StructureKind::Array, &IndexConfig::default(), &queries);
    println!("best over all windows: {best:?}");
}
