fn main() {
    const GRAMMAR: &str = "src/grammar.lalrpop";
    lalrpop::Configuration::new()
        .use_cargo_dir_conventions()
        .process_file(GRAMMAR)
        .expect("failed to process LALRPOP grammar");
    println!("cargo:rerun-if-changed={}", GRAMMAR);
}
