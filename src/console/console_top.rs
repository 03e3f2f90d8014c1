//! Line-protocol console front-end for the tour search.
//!
//! Reads commands line by line, runs each search on a worker thread so `stop`
//! and `status` stay responsive, and streams search events and replies as
//! text lines through a channel to a printer thread.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

use chrono::Local;
use rand::Rng;

use crate::search::search_control::StopHandle;
use crate::search::tour_config::TourConfig;
use crate::search::tour_events::TourObserver;
use crate::search::tour_search::{SearchResult, TourSearch};
use crate::tour_state::square::Square;
use crate::utils::render_board::render_board;

const CONSOLE_NAME: &str = "Knight Tour";

pub fn run_stdio_loop() -> io::Result<()> {
    let (line_tx, line_rx) = channel::<String>();

    let printer = thread::spawn(move || {
        let mut stdout = io::stdout();
        for line in line_rx {
            writeln!(stdout, "{line}").ok();
            stdout.flush().ok();
        }
    });

    let mut console = ConsoleState::new(line_tx);
    console.emit(format!("id name {CONSOLE_NAME}"));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if console.handle_command(&line) {
            break;
        }
    }

    console.shutdown();
    drop(console);
    printer.join().ok();
    Ok(())
}

/// Forwards search events to the output channel as text lines.
struct ChannelObserver {
    out: Sender<String>,
    ready: Option<Sender<()>>,
}

impl TourObserver for ChannelObserver {
    fn on_search_started(&mut self, _head: Square) {
        if let Some(ready) = self.ready.take() {
            ready.send(()).ok();
        }
    }

    fn on_move(&mut self, square: Square, move_number: u8) {
        self.out.send(format!("move {square} {move_number}")).ok();
    }

    fn on_backtrack(&mut self, square: Square) {
        self.out.send(format!("backtrack {square}")).ok();
    }

    fn on_solved(&mut self, path: &[Square]) {
        let squares: Vec<String> = path.iter().map(Square::to_string).collect();
        self.out.send(format!("solved {}", squares.join(" "))).ok();
    }

    fn on_search_ended(&mut self, found: bool) {
        self.out
            .send(format!("ended {}", if found { "found" } else { "notfound" }))
            .ok();
    }
}

pub struct ConsoleState {
    out: Sender<String>,
    config: TourConfig,
    search: Option<TourSearch>,
    worker: Option<JoinHandle<(TourSearch, SearchResult)>>,
    stop: StopHandle,
}

impl ConsoleState {
    pub fn new(out: Sender<String>) -> Self {
        let config = TourConfig::default();
        let search = TourSearch::with_config(config.clone());
        let stop = search.stop_handle();
        Self {
            out,
            config,
            search: Some(search),
            worker: None,
            stop,
        }
    }

    fn emit(&self, line: String) {
        self.out.send(line).ok();
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.worker.is_some()
    }

    /// Handle one command line. Returns `true` when the console should exit.
    pub fn handle_command(&mut self, line: &str) -> bool {
        self.collect_finished();

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "select" => {
                let arg = parts.next().unwrap_or_default();
                if let Err(err) = self.handle_select(arg) {
                    self.emit(format!("info string select error: {err}"));
                }
            }
            "start" => self.handle_start(),
            "stop" => {
                if self.is_searching() {
                    self.stop.stop();
                    self.emit("info string stop requested".to_owned());
                } else {
                    self.emit("info string no search running".to_owned());
                }
            }
            "wait" => self.join_worker(),
            "reset" => {
                if self.is_searching() {
                    self.stop.stop();
                    self.join_worker();
                }
                if let Some(search) = self.search.as_mut() {
                    search.reset();
                }
                self.emit("info string board reset".to_owned());
            }
            "board" => match self.search.as_ref() {
                Some(search) if !self.is_searching() => {
                    for row in render_board(search.board()).lines() {
                        self.emit(row.to_owned());
                    }
                }
                _ => self.emit("info string board busy while searching".to_owned()),
            },
            "status" => {
                self.emit(format!(
                    "info string status running {} nodes {} start {}",
                    self.is_searching(),
                    self.stop.nodes_visited(),
                    self.config.start_square
                ));
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    self.emit(format!("info string setoption error: {err}"));
                }
            }
            "quit" => {
                self.shutdown();
                return true;
            }
            _ => {
                // Unknown commands are ignored.
            }
        }

        false
    }

    fn handle_select(&mut self, arg: &str) -> Result<(), String> {
        if self.is_searching() {
            return Err("cannot select while searching".to_owned());
        }
        let square = if arg.eq_ignore_ascii_case("random") {
            let mut rng = rand::rng();
            Square::at(rng.random_range(0..8), rng.random_range(0..8))
        } else {
            Square::parse(arg).map_err(|e| e.to_string())?
        };
        self.apply_option("StartSquare", &square.to_string())?;
        self.emit(format!("info string start square {square}"));
        Ok(())
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        if self.is_searching() {
            return Err("cannot change options while searching".to_owned());
        }

        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<String>::new();
        let mut value_tokens = Vec::<String>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok.to_owned()),
                _ if mode == "value" => value_tokens.push(tok.to_owned()),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");
        self.apply_option(&name, &value)
    }

    fn apply_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        self.config.set_option(name, value)?;
        if let Some(search) = self.search.as_mut() {
            search.set_option(name, value)?;
        }
        Ok(())
    }

    fn handle_start(&mut self) {
        if self.is_searching() {
            self.emit("info string search already running".to_owned());
            return;
        }
        let Some(mut search) = self.search.take() else {
            self.emit("info string search unavailable".to_owned());
            return;
        };

        let start = self.config.start_square;
        self.stop = search.stop_handle();
        self.emit(format!(
            "info string search started {} from {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            start
        ));

        let (ready_tx, ready_rx) = channel::<()>();
        let out = self.out.clone();
        let worker = thread::spawn(move || {
            let mut observer = ChannelObserver {
                out,
                ready: Some(ready_tx),
            };
            let result = search.start(start, &mut observer);
            (search, result)
        });

        // Hold the command loop until the run is armed, so a following
        // `stop` cannot be cleared by the run's own start-up. A worker that
        // dies first drops the sender and ends the wait.
        ready_rx.recv().ok();
        self.worker = Some(worker);
    }

    fn collect_finished(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.is_finished()) {
            self.join_worker();
        }
    }

    fn join_worker(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        match worker.join() {
            Ok((search, result)) => {
                self.search = Some(search);
                self.emit(format!("result {}", result.outcome()));
                for line in result.info_lines {
                    self.emit(line);
                }
            }
            Err(_) => {
                let search = TourSearch::with_config(self.config.clone());
                self.stop = search.stop_handle();
                self.search = Some(search);
                self.emit("info string search thread panicked; state rebuilt".to_owned());
            }
        }
    }

    /// Stop and join any running search.
    pub fn shutdown(&mut self) {
        if self.is_searching() {
            self.stop.stop();
            self.join_worker();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{channel, Receiver};

    use super::ConsoleState;

    fn console() -> (ConsoleState, Receiver<String>) {
        let (tx, rx) = channel();
        (ConsoleState::new(tx), rx)
    }

    fn drain(rx: &Receiver<String>) -> Vec<String> {
        rx.try_iter().collect()
    }

    #[test]
    fn start_and_wait_streams_a_full_tour() {
        let (mut console, rx) = console();
        for cmd in ["setoption name MemoMb value 1", "select a1", "start", "wait"] {
            assert!(!console.handle_command(cmd));
        }
        let lines = drain(&rx);

        assert!(lines.contains(&"info string start square a1".to_owned()));
        assert!(lines.contains(&"move a1 1".to_owned()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("move ")).count(), 64);
        let solved = lines
            .iter()
            .find(|l| l.starts_with("solved "))
            .expect("solved line");
        assert_eq!(solved.split_whitespace().count(), 65);
        assert!(lines.contains(&"ended found".to_owned()));
        assert!(lines.contains(&"result found".to_owned()));
        assert!(lines.iter().any(|l| l.starts_with("info string tour outcome found")));
    }

    #[test]
    fn board_and_reset_after_search() {
        let (mut console, rx) = console();
        console.handle_command("setoption name MemoMb value 1");
        console.handle_command("start");
        console.handle_command("wait");
        let _ = drain(&rx);

        console.handle_command("board");
        let board = drain(&rx);
        assert_eq!(board.len(), 10);
        assert!(board.iter().any(|l| l.contains("64")));

        console.handle_command("reset");
        console.handle_command("board");
        let lines = drain(&rx);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "info string board reset");
        for (row, line) in lines[2..10].iter().enumerate() {
            let rank = row + 1;
            assert_eq!(line, &format!("{rank}   .  .  .  .  .  .  .  . {rank}"));
        }
    }

    #[test]
    fn stop_interrupts_a_long_search() {
        let (mut console, rx) = console();
        // Plain backtracking from an empty board does not finish in practice.
        console.handle_command("setoption name Ordering value canonical");
        console.handle_command("start");
        assert!(console.is_searching());
        console.handle_command("stop");
        console.handle_command("wait");
        assert!(!console.is_searching());

        let lines = drain(&rx);
        assert!(lines.contains(&"info string stop requested".to_owned()));
        assert!(lines.contains(&"ended notfound".to_owned()));
        assert!(lines.contains(&"result stopped".to_owned()));
    }

    #[test]
    fn reset_while_searching_stops_first() {
        let (mut console, rx) = console();
        console.handle_command("setoption name Ordering value canonical");
        console.handle_command("start");
        console.handle_command("select b1");
        console.handle_command("reset");
        assert!(!console.is_searching());

        let lines = drain(&rx);
        assert!(lines.contains(&"info string select error: cannot select while searching".to_owned()));
        let stopped = lines
            .iter()
            .position(|l| l == "result stopped")
            .expect("stopped result");
        let reset = lines
            .iter()
            .position(|l| l == "info string board reset")
            .expect("reset line");
        assert!(stopped < reset);
    }

    #[test]
    fn errors_are_reported_as_info_lines() {
        let (mut console, rx) = console();
        console.handle_command("select z9");
        console.handle_command("setoption name Memo value maybe");
        console.handle_command("stop");
        console.handle_command("frobnicate");
        let lines = drain(&rx);
        assert_eq!(
            lines,
            vec![
                "info string select error: invalid square 'z9'".to_owned(),
                "info string setoption error: invalid Memo value 'maybe'".to_owned(),
                "info string no search running".to_owned(),
            ]
        );
    }

    #[test]
    fn status_reports_start_square_and_quit_exits() {
        let (mut console, rx) = console();
        console.handle_command("select random");
        console.handle_command("select 1,7");
        console.handle_command("status");
        let lines = drain(&rx);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("info string status running false nodes 0 start h2")
        );
        assert!(console.handle_command("quit"));
    }
}
