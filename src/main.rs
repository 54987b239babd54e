use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use gomoku_ai::*;

mod display;
use display::*;

fn main() -> Result<()> {
    let mut engine = Engine::new();
    let mut rng = rand::thread_rng();

    let stdin = stdin();

    println!("Welcome to Gomoku\n");

    let mut ai_players = (false, false);

    // choose AI control of Black
    loop {
        let mut buffer = String::new();
        print!("Is Black AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of White
    loop {
        let mut buffer = String::new();
        print!("Is White AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut side = Side::Black;
    let mut last_win: Option<Win> = None;

    // game loop
    loop {
        draw(&engine, last_win.as_ref().map(|win| &win.line))?;

        match engine.status() {
            Status::InProgress => {
                let ai_turn = match side {
                    Side::Black => ai_players.0,
                    Side::White => ai_players.1,
                };

                let (x, y) = if ai_turn {
                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let (x, y) = engine.find_best_move(side, &mut rng)?;
                    println!("{} (AI) plays {}", side, format_coord(x, y));
                    (x, y)
                } else {
                    print!(
                        "{} move (K10, v K10 = score, s = switch sides, q = quit) > ",
                        side
                    );
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim() {
                        "q" => return Ok(()),
                        "s" => {
                            ai_players = (ai_players.1, ai_players.0);
                            engine.note_side_switch();
                            println!("Players have switched sides");
                            continue;
                        }
                        text => {
                            if let Some(rest) = text.strip_prefix('v') {
                                match parse_coord(rest) {
                                    Ok((vx, vy)) => println!(
                                        "{} at {}: attack {}, defence {}",
                                        side,
                                        format_coord(vx, vy),
                                        engine.value_of(vx, vy, side)?,
                                        engine.value_of(vx, vy, side.opponent())?
                                    ),
                                    Err(err) => println!("{}", err),
                                }
                                continue;
                            }
                            match parse_coord(text) {
                                Err(err) => {
                                    println!("{}", err);
                                    continue;
                                }
                                Ok(cell) => cell,
                            }
                        }
                    }
                };

                match engine.place_stone(x, y, side) {
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                    Ok(Some(win)) => last_win = Some(win),
                    Ok(None) => {}
                }
                side = side.opponent();
            }

            // end states
            Status::Won(winner) => {
                match &last_win {
                    Some(win) => println!("{} wins with a {} line!", winner, win.direction),
                    None => println!("{} wins!", winner),
                }
                print_move_log(&engine);
                if !play_again(&stdin)? {
                    break;
                }
                engine.reset();
                side = Side::Black;
                last_win = None;
            }
            Status::Drawn => {
                println!("No winnable lines remain, the game is a draw.");
                print_move_log(&engine);
                if !play_again(&stdin)? {
                    break;
                }
                engine.reset();
                side = Side::Black;
                last_win = None;
            }
        }
    }
    Ok(())
}

fn print_move_log(engine: &Engine) {
    println!("\nMoves played:");
    for entry in engine.move_log() {
        match entry.note {
            Some(note) => println!(
                "{:>3}. {} {} ({})",
                entry.seq,
                entry.side,
                format_coord(entry.x, entry.y),
                note
            ),
            None => println!(
                "{:>3}. {} {}",
                entry.seq,
                entry.side,
                format_coord(entry.x, entry.y)
            ),
        }
    }
}

fn play_again(stdin: &Stdin) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("Play again? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
