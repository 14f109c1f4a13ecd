use suffixdex::{IndexConfig, LongestPrefixMatch, StructureKind};

fn main() {
    // This example shows how to build the three suffix structures and search them.

    let text = b"ACATACTAGATCCACCA";

    let trie = suffixdex::build_suffix_trie(text);
    let tree = suffixdex::build_suffix_tree(text);
    let suffix_array = suffixdex::build_suffix_array(text);

    let query = b"TAGAT";
    assert_eq!(suffixdex::search_trie(&trie, query), 5);
    assert_eq!(suffixdex::search_tree(&tree, query), 5);
    assert_eq!(suffixdex::search_array(text, &suffix_array, query), 5);

    println!(
        "The trie has {} nodes, the tree has {} nodes.",
        trie.num_nodes(),
        tree.num_nodes()
    );

    // a different terminal symbol can be configured, for example when the text contains '$'
    let text = b"AC$GT";
    let config = *IndexConfig::new().terminal(b'#');

    for kind in StructureKind::ALL {
        let index = config.construct(kind, text);

        for query in [b"C$G".as_slice(), b"GTA", b"TT"] {
            println!(
                "{kind}: {} : {}",
                String::from_utf8_lossy(query),
                index.longest_prefix_match(query)
            );
        }
    }
}
