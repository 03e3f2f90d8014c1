use knight_tour::console::console_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
