//! Welcome banner display for chat sessions.

use console::style;

/// Print the banner shown before the prompt appears.
pub fn print_welcome_banner(gateway_url: &str) {
    println!();
    println!("  😼🛸 {}", style("Fizzbit").magenta().bold());
    println!(
        "  {}",
        style("Alien cat. Saturn napper. Chaotic space fact dispenser.").dim()
    );
    println!();
    println!("  {}  {}", style("Gateway:").bold(), style(gateway_url).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
