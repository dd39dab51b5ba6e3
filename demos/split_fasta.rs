use fastasieve::*;

fn main() {
    std::fs::create_dir_all("demo_output").unwrap();

    let sinks = SplitSinks::new(SplitConfig {
        dir: "demo_output".into(),
        prefix: "part".into(),
        extension: ".fa".into(),
        max_records: 2,
        max_len: 0,
    })
    .unwrap();

    iter_fasta("demo_data/simple.fa", 256)
        .unwrap()
        .dedup()
        .split_fasta(sinks, Wrap::Keep)
        .run()
        .unwrap();
}
