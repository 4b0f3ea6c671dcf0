use crate::render::Renderer;
use anyhow::Result;
use checkers_agents::{Agent, NegamaxAgent, SearchConfig};
use checkers_core::{legal_jumps, GameState, History, JumpChain, Move, Side, Turn, BOARD_SIZE};
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::info;

/// Who plays which side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Human vs human
    Hvh,
    /// Human (red) vs computer (white)
    Hva,
    /// Computer vs computer
    Ava,
}

impl GameMode {
    /// Plies rolled back by one `undo`, so a human lands on their own turn again.
    pub fn undo_steps(self) -> usize {
        match self {
            GameMode::Hva => 2,
            GameMode::Hvh | GameMode::Ava => 1,
        }
    }

    /// Builds the red and white players.
    pub fn players(self, config: SearchConfig) -> (Player, Player) {
        let computer = |config| Player::Computer(Box::new(NegamaxAgent::with_config(config)));
        match self {
            GameMode::Hvh => (Player::Human, Player::Human),
            GameMode::Hva => (Player::Human, computer(config)),
            GameMode::Ava => {
                let white = SearchConfig {
                    seed: config.seed.map(|seed| seed.wrapping_add(1)),
                    ..config
                };
                (computer(config), computer(white))
            }
        }
    }
}

pub enum Player {
    Human,
    Computer(Box<dyn Agent>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side that made the last move
    Winner(Side),
    Quit,
    TurnLimit,
}

enum Step {
    Played(Turn),
    Undo,
    Redo,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Undo,
    Redo,
    Empty,
    Move(Move),
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "" => return Input::Empty,
        "q" | "quit" | "exit" => return Input::Quit,
        "u" | "undo" => return Input::Undo,
        "r" | "redo" => return Input::Redo,
        _ => {}
    }

    let numbers: Option<Vec<i8>> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i8>()
                .ok()
                .filter(|n| (0..BOARD_SIZE).contains(n))
        })
        .collect();

    match numbers.as_deref() {
        Some(&[from_row, from_col, to_row, to_col]) => {
            Input::Move(Move::new(from_row, from_col, to_row, to_col))
        }
        _ => Input::Invalid,
    }
}

/// Terminal game loop over a shared history.
pub struct Game<R, W> {
    history: History,
    mode: GameMode,
    red: Player,
    white: Player,
    renderer: Renderer,
    max_turns: Option<usize>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(state: GameState, mode: GameMode, config: SearchConfig, input: R, out: W) -> Self {
        let (red, white) = mode.players(config);
        Self {
            history: History::new(state),
            mode,
            red,
            white,
            renderer: Renderer::plain(),
            max_turns: None,
            input,
            out,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Stops the game once this many plies have been played.
    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn run(&mut self) -> Result<Outcome> {
        info!(mode = ?self.mode, "game started");

        loop {
            let state = self.history.current().clone();
            let side = state.side_to_move();
            self.renderer.draw(&mut self.out, &state.board)?;

            if state.is_game_over() {
                let winner = side.opponent();
                writeln!(self.out, "{winner} wins!")?;
                info!(%winner, plies = self.history.cursor(), "game over");
                return Ok(Outcome::Winner(winner));
            }

            if self
                .max_turns
                .is_some_and(|max| self.history.cursor() >= max)
            {
                writeln!(self.out, "Turn limit reached.")?;
                info!(plies = self.history.cursor(), "turn limit reached");
                return Ok(Outcome::TurnLimit);
            }

            writeln!(self.out, "{side} to move.")?;
            let step = match self.player_mut(side) {
                Player::Computer(agent) => Step::Played(computer_turn(agent.as_mut(), &state)?),
                Player::Human => self.human_turn(&state)?,
            };

            match step {
                Step::Played(turn) => {
                    let moves = describe(&turn.path);
                    writeln!(self.out, "{side} played {moves}")?;
                    info!(%side, %moves, "turn played");
                    self.history.record(turn.state);
                }
                Step::Undo => {
                    let steps = self.mode.undo_steps();
                    if self.history.undo(steps).is_none() {
                        writeln!(self.out, "Nothing to undo.")?;
                    }
                }
                Step::Redo => {
                    let steps = self.mode.undo_steps();
                    if self.history.redo(steps).is_none() {
                        writeln!(self.out, "Nothing to redo.")?;
                    }
                }
                Step::Quit => {
                    info!("game abandoned");
                    return Ok(Outcome::Quit);
                }
            }
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Red => &mut self.red,
            Side::White => &mut self.white,
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn human_turn(&mut self, state: &GameState) -> Result<Step> {
        let side = state.side_to_move();
        let jumps = legal_jumps(&state.board, side);
        let legal = state.legal_turn_moves();

        loop {
            let Some(line) =
                self.prompt("Move (from row, from col, to row, to col), undo, redo or quit: ")?
            else {
                return Ok(Step::Quit);
            };

            let mv = match parse_input(&line) {
                Input::Quit => return Ok(Step::Quit),
                Input::Undo => return Ok(Step::Undo),
                Input::Redo => return Ok(Step::Redo),
                Input::Empty => continue,
                Input::Invalid => {
                    writeln!(self.out, "Enter four numbers between 0 and 7.")?;
                    continue;
                }
                Input::Move(mv) => mv,
            };

            if !mv.is_jump() && !jumps.is_empty() {
                writeln!(self.out, "A jump is available and must be taken.")?;
                continue;
            }
            if !legal.contains(&mv) {
                writeln!(self.out, "Illegal move {mv}.")?;
                continue;
            }

            if !mv.is_jump() {
                return Ok(Step::Played(state.play_turn(mv, |_, _| None)?));
            }
            return self.human_chain(state, mv);
        }
    }

    fn human_chain(&mut self, state: &GameState, opening: Move) -> Result<Step> {
        let side = state.side_to_move();
        let mut board = state.board.clone();
        let mut chain = JumpChain::start(&mut board, opening)?;

        loop {
            let next = chain.next_jumps(&board);
            if next.is_empty() {
                break;
            }

            self.renderer.draw(&mut self.out, &board)?;
            writeln!(self.out, "Keep jumping: {}", describe_options(&next))?;
            let Some(line) = self.prompt("Next jump: ")? else {
                return Ok(Step::Quit);
            };

            match parse_input(&line) {
                Input::Quit => return Ok(Step::Quit),
                Input::Move(mv) => {
                    if let Err(err) = chain.advance(&mut board, mv) {
                        writeln!(self.out, "{err}.")?;
                    }
                }
                _ => writeln!(self.out, "Finish the jump first.")?,
            }
        }

        Ok(Step::Played(Turn {
            state: GameState::from_board(board, side.opponent()),
            path: chain.into_path(),
        }))
    }
}

fn computer_turn(agent: &mut dyn Agent, state: &GameState) -> Result<Turn> {
    let side = state.side_to_move();
    let mv = agent.choose_move(state)?;
    let turn = state.play_search_turn(mv, |board, options| {
        let view = GameState::from_board(board.clone(), side);
        agent.choose_continuation(&view, options)
    })?;
    Ok(turn)
}

fn describe(path: &[Move]) -> String {
    path.iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(", then ")
}

fn describe_options<'a>(options: impl IntoIterator<Item = &'a Move>) -> String {
    options
        .into_iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{layouts, Board, Square};
    use std::io::Cursor;

    fn game(state: GameState, mode: GameMode, script: &str) -> Game<Cursor<Vec<u8>>, Vec<u8>> {
        let config = SearchConfig::depth(2).with_seed(1);
        Game::new(state, mode, config, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(game: &Game<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(game.output()).into_owned()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("5 2 4 3\n"), Input::Move(Move::new(5, 2, 4, 3)));
        assert_eq!(parse_input("5,2, 4,3"), Input::Move(Move::new(5, 2, 4, 3)));
        assert_eq!(parse_input("  QUIT "), Input::Quit);
        assert_eq!(parse_input("undo"), Input::Undo);
        assert_eq!(parse_input("r"), Input::Redo);
        assert_eq!(parse_input("\n"), Input::Empty);
        assert_eq!(parse_input("5 2 4"), Input::Invalid);
        assert_eq!(parse_input("5 2 4 8"), Input::Invalid);
        assert_eq!(parse_input("e2e4"), Input::Invalid);
        assert_eq!(parse_input("5 2 x 4 3"), Input::Invalid);
    }

    #[test]
    fn test_undo_steps() {
        assert_eq!(GameMode::Hvh.undo_steps(), 1);
        assert_eq!(GameMode::Hva.undo_steps(), 2);
    }

    #[test]
    fn test_human_move_and_undo() {
        let mut game = game(GameState::new(), GameMode::Hvh, "5 2 4 3\nundo\nredo\nquit\n");
        assert_eq!(game.run().unwrap(), Outcome::Quit);

        assert_eq!(game.history().cursor(), 1);
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            game.history().current().board.piece_at(4, 3),
            Square::RedMan
        );
        assert!(output(&game).contains("Red played (5,2) -> (4,3)"));
    }

    #[test]
    fn test_illegal_input_is_requested_again() {
        let mut game = game(GameState::new(), GameMode::Hvh, "5 0 4 0\nhello\n5 0 4 1\n");
        assert_eq!(game.run().unwrap(), Outcome::Quit);

        let text = output(&game);
        assert!(text.contains("Illegal move (5,0) -> (4,0)."));
        assert!(text.contains("Enter four numbers"));
        assert_eq!(game.history().cursor(), 1);
    }

    #[test]
    fn test_nothing_to_undo() {
        let mut game = game(GameState::new(), GameMode::Hvh, "undo\nquit\n");
        game.run().unwrap();
        assert!(output(&game).contains("Nothing to undo."));
    }

    #[test]
    fn test_forced_jump_and_win() {
        let board = Board::from_diagram(layouts::SINGLE_JUMP).unwrap();
        let state = GameState::from_board(board, Side::Red);
        let mut game = game(state, GameMode::Hvh, "3 4 2 5\n3 4 1 2\n");

        assert_eq!(game.run().unwrap(), Outcome::Winner(Side::Red));
        let text = output(&game);
        assert!(text.contains("must be taken"));
        assert!(text.contains("Red wins!"));
    }

    #[test]
    fn test_human_chain() {
        let mut board = Board::empty();
        board.set_square(6, 1, Square::RedMan).unwrap();
        board.set_square(5, 2, Square::WhiteMan).unwrap();
        board.set_square(3, 4, Square::WhiteMan).unwrap();
        board.set_square(0, 7, Square::WhiteMan).unwrap();
        let state = GameState::from_board(board, Side::Red);
        let mut game = game(state, GameMode::Hvh, "6 1 4 3\nundo\n4 3 2 1\n4 3 2 5\nquit\n");

        assert_eq!(game.run().unwrap(), Outcome::Quit);
        let current = game.history().current();
        assert_eq!(current.side_to_move(), Side::White);
        assert_eq!(current.board.piece_at(2, 5), Square::RedMan);
        assert_eq!(current.board.count(Square::WhiteMan), 1);

        let text = output(&game);
        assert!(text.contains("Finish the jump first."));
        assert!(text.contains("does not continue the current jump chain"));
    }

    #[test]
    fn test_computer_game_stops_at_turn_limit() {
        let mut game = game(GameState::new(), GameMode::Ava, "").with_max_turns(Some(4));
        assert_eq!(game.run().unwrap(), Outcome::TurnLimit);
        assert_eq!(game.history().cursor(), 4);
    }

    #[test]
    fn test_human_against_computer_undo() {
        let mut game = game(GameState::new(), GameMode::Hva, "5 2 4 3\nundo\nquit\n");
        assert_eq!(game.run().unwrap(), Outcome::Quit);

        // The computer answered, then undo rolled back both plies.
        assert_eq!(game.history().cursor(), 0);
        assert_eq!(game.history().len(), 3);
        assert!(output(&game).contains("White played"));
    }
}
