fn main() {
    scenarist::app::cli::run();
}
