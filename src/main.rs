use log::error;
use order_sniffer::{parse_order, Catalog};
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the order text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let catalog = match Catalog::from_embedded_menu() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load embedded menu: {}", e);
            std::process::exit(1);
        }
    };

    match parse_order(&input, &catalog) {
        Ok(order) => {
            println!(
                "Base: {} (token: {:?}, confidence: {:.2})",
                order.base.name, order.base.token, order.base.confidence
            );

            if order.toppings.is_empty() {
                println!("Toppings: none");
            } else {
                println!("Toppings: {}", order.toppings.join(", "));
            }

            println!("Total: {:.2}", order.total_cost);
        }
        Err(e) => {
            error!("Error parsing order: {}", e);
            std::process::exit(1);
        }
    }
}
