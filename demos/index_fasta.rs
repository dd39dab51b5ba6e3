use fastasieve::*;

fn main() {
    let index = FastaIndex::build("demo_data/simple.fa").unwrap();
    let bytes = index.fetch_path("demo_data/simple.fa", b"chr2").unwrap();
    print!("{}", utf8(&bytes));
}
