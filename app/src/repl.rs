//! Line-command front end for the controller.
//!
//! Each line maps to one UI event (typing into a field, clicking a list
//! button, submitting). The page is re-rendered after every event.

use std::io::{BufRead, Write};

use anyhow::Result;
use posts_core::{Controller, Dispatch, Field, PostId, SubmitOutcome, SubmitRejection, Transport};
use thiserror::Error;

use crate::view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(Field, String),
    Update(PostId),
    PartialUpdate(PostId),
    Delete(PostId),
    Submit,
    Refresh,
    Cancel,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs a post id")]
    MissingId(&'static str),
}

pub const HELP: &str = "\
commands:
  judul <text>       set the title
  deskripsi <text>   set the description
  update <id>        edit a post (full update)
  patch <id>         edit a post (partial update)
  delete <id>        delete a post
  submit             send the form
  cancel             clear the form
  refresh            reload the list
  help               show this text
  quit               exit";

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };

    // Field text is kept verbatim; only the separating space is consumed.
    match word {
        "judul" => Ok(Command::Input(Field::Judul, rest.to_string())),
        "deskripsi" => Ok(Command::Input(Field::Deskripsi, rest.to_string())),
        "update" => id_arg("update", rest).map(Command::Update),
        "patch" => id_arg("patch", rest).map(Command::PartialUpdate),
        "delete" => id_arg("delete", rest).map(Command::Delete),
        "submit" => Ok(Command::Submit),
        "refresh" => Ok(Command::Refresh),
        "cancel" => Ok(Command::Cancel),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn id_arg(command: &'static str, rest: &str) -> Result<PostId, ParseError> {
    let id = rest.trim();
    if id.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    Ok(PostId::from(id))
}

/// Read commands from `input` until EOF or `quit`, writing the page to
/// `output` after each one.
pub async fn run<T, R, W>(controller: &mut Controller<T>, input: R, mut output: W) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    write_page(&mut output, controller, None)?;

    for line in input.lines() {
        let notice = match parse(&line?) {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => continue,
            Ok(Command::Help) => Some(HELP.to_string()),
            Ok(command) => apply(controller, command).await,
            Err(e) => Some(e.to_string()),
        };
        write_page(&mut output, controller, notice.as_deref())?;
    }
    Ok(())
}

/// Apply one command. Returns a notice for the user when something did not
/// happen as asked.
pub async fn apply<T: Transport>(controller: &mut Controller<T>, command: Command) -> Option<String> {
    match command {
        Command::Input(field, value) => {
            controller.input(field, value);
            None
        }
        Command::Update(id) => select_notice(controller.select_update(&id), &id),
        Command::PartialUpdate(id) => select_notice(controller.select_partial_update(&id), &id),
        Command::Delete(id) => dispatch_notice("delete", controller.delete(id).await),
        Command::Submit => match controller.submit().await {
            SubmitOutcome::Rejected(SubmitRejection::Invalid(_)) => None,
            SubmitOutcome::Rejected(SubmitRejection::MissingId) => {
                Some("form has no post id; choose a post again".to_string())
            }
            SubmitOutcome::Dispatched(dispatch) => dispatch_notice("save", dispatch),
        },
        Command::Refresh => controller
            .refresh()
            .await
            .err()
            .map(|e| format!("could not load posts: {e}")),
        Command::Cancel => {
            controller.cancel();
            None
        }
        Command::Help | Command::Quit | Command::Empty => None,
    }
}

fn select_notice(found: bool, id: &PostId) -> Option<String> {
    (!found).then(|| format!("no post with id {id}"))
}

fn dispatch_notice(action: &str, dispatch: Dispatch) -> Option<String> {
    match (dispatch.mutation, dispatch.refresh) {
        (Ok(()), Ok(())) => None,
        (Err(e), _) => Some(format!("{action} failed: {e}")),
        (Ok(()), Err(e)) => Some(format!("could not load posts: {e}")),
    }
}

fn write_page<T: Transport, W: Write>(
    output: &mut W,
    controller: &Controller<T>,
    notice: Option<&str>,
) -> Result<()> {
    if let Some(notice) = notice {
        writeln!(output, "! {notice}")?;
    }
    let page = view::render(controller.form(), controller.posts())?;
    write!(output, "{page}")?;
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
