fn main() {
    tyquery::cli::run();
}
