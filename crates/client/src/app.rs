//! Line-oriented game loop.
//!
//! Reads one intent per line, hands it to the session and prints what
//! happened. All rules live in `phrase-core`; this module only parses and
//! formats.
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use phrase_core::{
    EffectOutcome, GameError, GameSession, GuessOutcome, PurchaseReceipt, RoundPhase, RoundStart,
    RoundSummary, StrikeAbsorber,
};

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Buy(String),
    Shop,
    Next,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut chars = line.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Guess(c));
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let command = match head.as_str() {
            "buy" => match words.next() {
                Some(id) => Self::Buy(id.to_string()),
                None => return Err("usage: buy <id>".to_string()),
            },
            "shop" => Self::Shop,
            "next" => Self::Next,
            "status" => Self::Status,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "" => return Err("empty input".to_string()),
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        if words.next().is_some() {
            return Err(format!("too many arguments for '{head}'"));
        }
        Ok(command)
    }
}

const HELP: &str = "\
Commands:
  <letter>    guess a letter
  buy <id>    buy a shop entry
  shop        list the shop
  next        start the next round
  status      show the board
  help        show this text
  quit        leave the game";

pub struct App<W> {
    session: GameSession,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(session: GameSession, out: W) -> Self {
        Self { session, out }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.start_round()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(message) => writeln!(self.out, "! {message}")?,
            }
        }

        let view = self.session.view();
        writeln!(self.out, "Bye. Final balance ${}, streak {}.", view.money, view.streak)?;
        tracing::info!(money = view.money, streak = view.streak, "session ended");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Guess(c) => match self.session.submit_guess(c) {
                Ok(outcome) => self.print_guess(&outcome)?,
                Err(err) => self.print_rejection(&err)?,
            },
            Command::Buy(id) => match self.session.purchase_by_id(&id) {
                Ok(receipt) => self.print_receipt(&receipt)?,
                Err(err) => self.print_rejection(&err)?,
            },
            Command::Shop => self.print_shop()?,
            Command::Next => self.start_round()?,
            Command::Status => self.print_board()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn start_round(&mut self) -> Result<()> {
        match self.session.start_round() {
            Ok(start) => self.print_start(&start),
            Err(err) => self.print_rejection(&err),
        }
    }

    fn print_rejection(&mut self, err: &dyn GameError) -> Result<()> {
        tracing::debug!(code = err.error_code(), severity = err.severity().as_str(), "rejected");
        writeln!(self.out, "! {err}")?;
        Ok(())
    }

    fn print_start(&mut self, start: &RoundStart) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "== New round: {} (difficulty {:.0}, {} strikes) ==",
            start.category, start.difficulty, start.max_strikes
        )?;
        if !start.auto_revealed.is_empty() {
            let letters: Vec<_> = start.auto_revealed.iter().map(|l| l.to_string()).collect();
            writeln!(self.out, "Upgrades revealed: {}", letters.join(", "))?;
        }
        self.print_board()?;
        if start.solved {
            self.print_summary()?;
        }
        Ok(())
    }

    fn print_guess(&mut self, outcome: &GuessOutcome) -> Result<()> {
        let letter = outcome.letter;
        match (outcome.matched, outcome.absorbed_by) {
            (true, _) => writeln!(self.out, "Yes, {letter} is in the phrase.")?,
            (false, Some(StrikeAbsorber::BonusStrike)) => {
                writeln!(self.out, "No {letter}. Your bonus strike absorbed it.")?
            }
            (false, Some(StrikeAbsorber::FreeGuess)) => {
                writeln!(self.out, "No {letter}. Free guess used, no strike.")?
            }
            (false, None) => writeln!(self.out, "No {letter}. Strike!")?,
        }
        self.print_board()?;
        if outcome.round_ended() {
            self.print_summary()?;
        }
        Ok(())
    }

    fn print_receipt(&mut self, receipt: &PurchaseReceipt) -> Result<()> {
        writeln!(
            self.out,
            "Bought {} ({}) for ${}. Balance ${}.",
            receipt.id, receipt.kind, receipt.cost, receipt.balance
        )?;
        match &receipt.outcome {
            Some(EffectOutcome::Revealed(letter)) => writeln!(self.out, "Revealed {letter}.")?,
            Some(EffectOutcome::Eliminated(letters)) => {
                let letters: String = letters.iter().map(|l| l.as_char()).collect();
                writeln!(self.out, "Eliminated {letters}.")?
            }
            Some(EffectOutcome::FreeGuessArmed) => {
                writeln!(self.out, "Your next wrong guess is free.")?
            }
            Some(EffectOutcome::BonusStrikeGranted { available }) => {
                writeln!(self.out, "Bonus strikes ready: {available}.")?
            }
            Some(EffectOutcome::NoEffect) => writeln!(self.out, "Nothing happened.")?,
            None => writeln!(self.out, "Takes effect from the next round.")?,
        }
        if receipt.outcome.is_some() {
            self.print_board()?;
        }
        if receipt.round_won {
            self.print_summary()?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        let view = self.session.view();
        let phrase: String = view
            .masked_phrase
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        writeln!(self.out, "  {}", phrase.trim_end())?;
        writeln!(self.out, "  Topic: {}", view.category)?;

        let mut extras = String::new();
        if view.bonus_strikes > 0 {
            extras.push_str(&format!(" +{} bonus", view.bonus_strikes));
        }
        if view.free_guess {
            extras.push_str(" [free guess]");
        }
        writeln!(
            self.out,
            "  Strikes {}/{}{}  Guessed: {}  ${}  Streak {}",
            view.strikes,
            view.max_strikes,
            extras,
            view.guessed.to_text(),
            view.money,
            view.streak
        )?;
        Ok(())
    }

    fn print_summary(&mut self) -> Result<()> {
        let Some(summary) = self.session.summary().cloned() else {
            return Ok(());
        };
        write_summary(&mut self.out, &summary)?;
        if self.session.state().phase == RoundPhase::RoundLost {
            writeln!(self.out, "Your money and upgrades are gone.")?;
        }
        writeln!(self.out, "Type 'shop' to browse or 'next' to continue.")?;
        Ok(())
    }

    fn print_shop(&mut self) -> Result<()> {
        let money = self.session.view().money;
        let rows: Vec<String> = self
            .session
            .shop()
            .iter()
            .map(|row| {
                let status = if row.owned {
                    "owned"
                } else if !row.available {
                    "locked"
                } else if row.affordable {
                    "buy"
                } else {
                    "-"
                };
                format!(
                    "  {:<6} {:<28} ${:<5} {:<24} {}",
                    status,
                    row.entry.id(),
                    row.entry.cost(),
                    row.entry.label(),
                    row.entry.description()
                )
            })
            .collect();

        writeln!(self.out, "Shop (balance ${money}):")?;
        for row in rows {
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }
}

fn write_summary(out: &mut impl Write, summary: &RoundSummary) -> Result<()> {
    if summary.won {
        writeln!(
            out,
            "Solved \"{}\"! Earned ${}. Streak {} -> {}.",
            summary.revealed_phrase, summary.money_earned, summary.streak_before, summary.streak_after
        )?;
    } else {
        writeln!(
            out,
            "Out of strikes. The phrase was \"{}\". Streak {} lost.",
            summary.revealed_phrase, summary.streak_before
        )?;
    }
    Ok(())
}
