use std::env;

use terrascope_catalogue::{Client, ClientOptions, ProductQuery, get_product_paths, parse_date};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!(
            "Usage:\n  cargo run --example cli -- search <collection> <start> <end> [band] [tileId]\n\nExample (Sentinel-2 TOC, one week, red band):\n  cargo run --example cli -- search urn:eop:VITO:TERRASCOPE_S2_TOC_V2 2023-06-01 2023-06-07 B04\n\nNotes:\n- Dates accept YYYY-MM-DD or YYYYMMDD.\n- Without a band, product counts are printed instead of paths."
        );
        return;
    }

    match args.get(1).map(|s| s.as_str()) {
        Some("search") => {
            let collection = args[2].clone();
            let start = parse_date(&args[3]).unwrap_or_else(|e| {
                eprintln!("bad start date: {e}");
                std::process::exit(2);
            });
            let end = parse_date(&args[4]).unwrap_or_else(|e| {
                eprintln!("bad end date: {e}");
                std::process::exit(2);
            });

            let mut query = ProductQuery::new(collection, start, end);
            if let Some(tile_id) = args.get(6) {
                query = query.tile_id(tile_id);
            }

            let client = Client::new(ClientOptions::default()).expect("create client");

            match client.get_products(&query) {
                Ok(products) => {
                    if let Some(band) = args.get(5) {
                        for path in get_product_paths(&products, band) {
                            println!("{path}");
                        }
                    } else {
                        println!("{} products", products.len());
                    }
                }
                Err(e) => {
                    eprintln!("search failed: {e}");
                    eprintln!("Tip: check the collection urn and that start <= end.");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Unknown command. Use: search");
            std::process::exit(2);
        }
    }
}
