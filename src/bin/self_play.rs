//! Self-play demonstration driving the full decision stack.
//!
//! Plays two agents against each other for a bounded number of plies,
//! standing in for the host controller: after every reply it re-renders the
//! master position into the wire placement format and hands it to the agent
//! whose turn it is.

use std::error::Error;

use chrono::Local;

use agent_chess::agent::{Agent, AgentReply};
use agent_chess::board::apply::apply_move;
use agent_chess::board::chess_types::{square_from_name, Color};
use agent_chess::board::placement::{load_position, placement_from_position, starting_placement};
use agent_chess::board::position::Position;
use agent_chess::errors::{ChessError, ChessResult};
use agent_chess::moves::chess_move::Move;
use agent_chess::moves::generator::generate_legal_moves;

const MAX_PLIES: u32 = 60;

fn log_line(message: &str) {
    println!("[{}] {message}", Local::now().format("%H:%M:%S%.3f"));
}

/// Resolves a wire reply against the legal moves of the master position,
/// the way the host controller validates agent output.
fn resolve_reply(position: &mut Position, reply: &AgentReply) -> ChessResult<Move> {
    let from = square_from_name(&reply.from)
        .ok_or_else(|| ChessError::IllegalMove(format!("bad source square {}", reply.from)))?;
    let to = square_from_name(&reply.to)
        .ok_or_else(|| ChessError::IllegalMove(format!("bad target square {}", reply.to)))?;
    generate_legal_moves(position)?
        .into_iter()
        .find(|mv| mv.from == from && mv.destination_square() == to)
        .ok_or_else(|| {
            ChessError::IllegalMove(format!("{}-{} is not legal here", reply.from, reply.to))
        })
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut white = Agent::new(Color::White);
    let mut black = Agent::new(Color::Black);
    let mut master = load_position(&starting_placement())?;

    log_line("self-play start");
    for ply in 0..MAX_PLIES {
        let side = master.side_to_move;
        let agent = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        agent.observe(&placement_from_position(&master))?;

        let (reply, report) = agent.choose_move_with_report()?;
        let Some(reply) = reply else {
            let verdict = if master.is_in_check(side) {
                "checkmate"
            } else {
                "stalemate"
            };
            log_line(&format!("{side:?} has no move: {verdict}"));
            break;
        };

        let mv = resolve_reply(&mut master, &reply)?;
        apply_move(&mut master, mv)?;
        log_line(&format!(
            "ply {:>2} {mv} (depth {}, {} nodes, {} ms, tt {}/{} hits)",
            ply + 1,
            report.depth,
            report.nodes,
            report.elapsed.as_millis(),
            report.table_stats.hits,
            report.table_stats.probes,
        ));
    }
    log_line("self-play finished");
    Ok(())
}
