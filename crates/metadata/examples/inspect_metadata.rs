use metadata::MetadataIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("metadata.json");

    println!("Loading metadata mapping...\n");

    let start = Instant::now();
    let index = MetadataIndex::load_from_file(path)
        .expect("Failed to load metadata");
    let elapsed = start.elapsed();

    let (users, movies) = index.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users indexed: {}", users);
    println!("Movies indexed: {}", movies);
}
