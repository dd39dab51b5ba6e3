use fastasieve::*;

fn main() {
    iter_fasta("demo_data/simple.fa", 256)
        .unwrap()
        .summary(std::io::stdout(), SummaryConfig::default())
        .run()
        .unwrap();
}
