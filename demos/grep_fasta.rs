use fastasieve::*;

fn main() {
    std::fs::create_dir_all("demo_output").unwrap();

    iter_fasta("demo_data/simple.fa", 256)
        .unwrap()
        .filter_header(Patterns::fixed(["chr"]), false)
        .dbg()
        .collect_fasta(create_sink("demo_output/chr.fa").unwrap(), Wrap::Width(60))
        .run()
        .unwrap();
}
