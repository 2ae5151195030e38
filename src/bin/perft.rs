use std::env;
use std::process;
use std::time::Instant;

use chess_rules::board::{Board, Color, STARTING_FEN};

fn usage() -> ! {
    eprintln!("usage: perft <depth> [fen] [--threads N] [--divide]");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let mut depth = None;
    let mut fen = None;
    let mut threads = 1;
    let mut divide = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--divide" => divide = true,
            "--threads" => {
                threads = match iter.next().and_then(|n| n.parse().ok()) {
                    Some(n) => n,
                    None => usage(),
                };
            }
            other if depth.is_none() => match other.parse::<usize>() {
                Ok(d) => depth = Some(d),
                Err(_) => usage(),
            },
            other => fen = Some(other.to_string()),
        }
    }

    let Some(depth) = depth else { usage() };
    let fen = fen.unwrap_or_else(|| STARTING_FEN.to_string());
    let (mut board, side) = match Board::from_fen(&fen) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("{board}");
    println!("side_to_move: {}", if side == Color::White { "white" } else { "black" });

    if divide {
        let start = Instant::now();
        let mut total = 0;
        for (origin, destination, nodes) in board.perft_divide(side, depth) {
            println!("{origin}{destination}: {nodes}");
            total += nodes;
        }
        println!("nodes: {total}");
        println!("time: {:.3}s", start.elapsed().as_secs_f64());
        return;
    }

    println!("depth        nodes   captures  e.p.  promos   checks  mates    time");
    for d in 1..=depth {
        let start = Instant::now();
        let stats = board.parallel_perft(side, d, threads);
        println!(
            "{:>5} {:>12} {:>10} {:>5} {:>7} {:>8} {:>6} {:>7.3}s",
            d,
            stats.nodes,
            stats.captures,
            stats.en_passants,
            stats.promotions,
            stats.checks,
            stats.checkmates,
            start.elapsed().as_secs_f64()
        );
    }
}
