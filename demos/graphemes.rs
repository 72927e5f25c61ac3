use affixing::config::Granularity;
use affixing::decision::segment_corpus;
use affixing::split::ScoringConfig;

fn main() {
    // Combining marks stay attached to their base letter when the trie is
    // built over grapheme clusters.
    let words = ["ña̐s", "ña̐n", "ña̐r", "pe̲s", "pe̲n", "pe̲r"];
    let config = ScoringConfig::with_threshold(3);

    for granularity in [Granularity::Chars, Granularity::Graphemes] {
        let report = segment_corpus(&words, &config, granularity, false);
        println!("{granularity:?}: winner={}", report.winner);
        for record in report.winning_records() {
            println!("  {record}");
        }
    }
}
