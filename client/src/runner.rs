use std::error::Error;
use std::io::Write;
use std::time::Duration;

use tictactoe_common::games::tictactoe::{BotInput, Mark, PeerEvent};
use tictactoe_common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, parse_command};
use crate::config::GameMode;
use crate::render::{HELP, render};
use crate::session::Session;

pub async fn run(mut session: Session, move_delay: Duration) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", intro(&session));
    println!("{}", render(session.game()));

    loop {
        if session.is_cpu_turn() {
            play_cpu_turn(&mut session, move_delay).await?;
            println!("{}", render(session.game()));
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Place(index) => match session.place(index) {
                Ok(outgoing) => {
                    relay(outgoing);
                    println!("{}", render(session.game()));
                }
                Err(e) => println!("{}", e),
            },
            Command::Restart => match session.restart() {
                Ok(outgoing) => {
                    relay(outgoing);
                    println!("{}", render(session.game()));
                }
                Err(e) => println!("{}", e),
            },
            Command::ResetAll => match session.reset_all() {
                Ok(outgoing) => {
                    relay(outgoing);
                    println!("{}", render(session.game()));
                }
                Err(e) => println!("{}", e),
            },
            Command::Peer(text) => match session.receive_peer(&text) {
                Ok(Some(PeerEvent::Moved { index, .. })) => {
                    println!("Peer took cell {}", index + 1);
                    println!("{}", render(session.game()));
                }
                Ok(Some(PeerEvent::Reset)) => {
                    println!("Peer started a new board");
                    println!("{}", render(session.game()));
                }
                Ok(None) => println!("Ignored invalid peer message"),
                Err(e) => println!("{}", e),
            },
            Command::Unknown(text) => println!("Unknown command '{}'. Type h for help.", text),
        }
    }

    let scores = session.game().scores();
    log!(
        "Session finished, score X {} O {}",
        scores.get(Mark::X),
        scores.get(Mark::O)
    );
    Ok(())
}

async fn play_cpu_turn(session: &mut Session, move_delay: Duration) -> Result<(), Box<dyn Error>> {
    tokio::time::sleep(move_delay).await;

    let Some(mut cpu) = session.take_cpu() else {
        return Ok(());
    };
    let input = BotInput::from_game_state(session.game());
    let mark = cpu.mark();

    let (chosen, cpu) = tokio::task::spawn_blocking(move || {
        let chosen = cpu.choose_move(input);
        (chosen, cpu)
    })
    .await?;
    session.restore_cpu(cpu);

    let Some(index) = chosen else {
        return Err("computer found no move in a game still in progress".into());
    };
    session.apply_cpu_move(index, mark)?;
    println!("Computer takes cell {}", index + 1);
    Ok(())
}

fn relay(outgoing: Option<String>) {
    if let Some(message) = outgoing {
        println!("Send to peer: {}", message);
    }
}

fn intro(session: &Session) -> String {
    let who = match (session.mode(), session.local_side()) {
        (GameMode::Local, _) | (_, None) => "Two players share this terminal.".to_string(),
        (GameMode::Cpu, Some(side)) => format!("You play {} against the computer.", side),
        (GameMode::Peer, Some(side)) => format!(
            "You play {} against a remote peer. Relay the 'Send to peer' lines to them \
             and paste their messages here.",
            side
        ),
    };
    format!("Tic-tac-toe. {} Type h for help.", who)
}
