// ABOUTME: Single-pass, character-driven parser that builds the statement list

use crate::error::LispError;
use crate::value::Value;

/// A list that is still being built; tracked on an explicit stack rather
/// than via recursion, since the character classes below (quote, open,
/// close, separator, continuation) are naturally a flat state machine over
/// one pass of the input, not a recursive-descent grammar.
struct OpenList {
    items: Vec<Value>,
    quoted: bool,
}

/// Parses a whole source string into its top-level statements.
///
/// Each character is classified into one of five classes (spec 4.1):
///
/// - `'` sets a pending quote bit for whatever opens or starts next.
/// - `(` opens a new list, tagged with the pending quote bit.
/// - `)` closes the innermost open list; closing the outermost list records
///   a completed statement.
/// - any whitespace character (space, tab, newline — newlines carry no
///   special meaning here) ends an in-progress atom.
/// - anything else continues an in-progress atom, or starts one (inheriting
///   the pending quote bit, or the enclosing list's quote bit if no quote
///   was pending).
///
/// A quote that is never consumed because whitespace intervenes before the
/// next list or atom simply stays pending — this permissive behaviour is
/// deliberate (spec Open Question 1).
pub fn parse(source: &str) -> Result<Vec<Value>, LispError> {
    let mut statements = Vec::new();
    let mut stack: Vec<OpenList> = Vec::new();
    let mut atom: Option<(String, bool)> = None;
    let mut pending_quote = false;

    for c in source.chars() {
        match c {
            '\'' => {
                if atom.is_some() {
                    return Err(LispError::QuoteMidAtom);
                }
                pending_quote = true;
            }
            '(' => {
                flush_atom(&mut atom, &mut stack)?;
                let quoted = pending_quote;
                pending_quote = false;
                stack.push(OpenList {
                    items: Vec::new(),
                    quoted,
                });
            }
            ')' => {
                flush_atom(&mut atom, &mut stack)?;
                let closed = stack.pop().ok_or(LispError::StrayClosingParen)?;
                let value = Value::list(closed.items, closed.quoted);
                match stack.last_mut() {
                    Some(parent) => parent.items.push(value),
                    None => statements.push(value),
                }
            }
            c if c.is_whitespace() => {
                flush_atom(&mut atom, &mut stack)?;
            }
            c => match &mut atom {
                Some((text, _)) => text.push(c),
                None => {
                    let enclosing_quoted = stack.last().ok_or(LispError::AtomOutsideList)?.quoted;
                    let quoted = pending_quote || enclosing_quoted;
                    pending_quote = false;
                    atom = Some((c.to_string(), quoted));
                }
            },
        }
    }

    if !stack.is_empty() {
        return Err(LispError::UnclosedStatement);
    }

    Ok(statements)
}

/// Pushes an in-progress atom (if any) into the list currently open at the
/// top of the stack, and clears it. A no-op when no atom is in progress.
fn flush_atom(atom: &mut Option<(String, bool)>, stack: &mut [OpenList]) -> Result<(), LispError> {
    if let Some((text, quoted)) = atom.take() {
        stack
            .last_mut()
            .ok_or(LispError::AtomOutsideList)?
            .items
            .push(Value::atom(text, quoted));
    }
    Ok(())
}
