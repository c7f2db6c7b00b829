//! Terminal host
//!
//! Runs a `Conversation` over any line-oriented reader and writer so the loop
//! can be driven by stdin/stdout or by tests.

use crate::conversation::{is_quit_command, Conversation};
use crate::error::panic_message;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

const USER_PROMPT: &str = "👤 Anda: ";
const BOT_PREFIX: &str = "🤖 Bot: ";

/// Utterances of the scripted demo session
pub const DEMO_SCRIPT: &[&str] = &[
    "menu",
    "Saya mau 2 cappuccino large dan 1 sandwich",
    "tambah 1 es kopi susu",
    "konfirmasi",
    "ya, nama saya Budi",
];

/// Menu replies are cut to this many characters in the demo
const DEMO_PREVIEW_CHARS: usize = 200;

/// Interactive loop: one line in, one reply out, until a quit word or EOF.
///
/// A panic inside a turn is reported and the loop carries on with the next line.
pub fn run_chat<R: BufRead, W: Write>(
    conversation: &mut Conversation,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", conversation.start())?;

    loop {
        write!(output, "\n{}", USER_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match panic::catch_unwind(AssertUnwindSafe(|| conversation.process_message(text))) {
            Ok(reply) => writeln!(output, "\n{}{}", BOT_PREFIX, reply)?,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::error!(%reason, "turn aborted");
                writeln!(output, "\n❌ Error: {}", reason)?;
                writeln!(output, "Silakan coba lagi.")?;
            }
        }

        if is_quit_command(text) {
            break;
        }

        conversation.reset_after_completion();
    }

    Ok(())
}

/// Plays `DEMO_SCRIPT` against a fresh conversation and prints each exchange.
pub fn run_demo<W: Write>(conversation: &mut Conversation, mut output: W) -> io::Result<()> {
    writeln!(output, "🧪 TESTING CHATBOT FLOW")?;
    writeln!(output, "{}", "=".repeat(40))?;

    writeln!(output, "\n1. Starting chatbot...")?;
    writeln!(output, "Bot: {}", conversation.start())?;

    for (step, utterance) in DEMO_SCRIPT.iter().enumerate() {
        writeln!(output, "\n{}. Anda: {}", step + 2, utterance)?;
        let reply = conversation.process_message(utterance);
        if *utterance == "menu" {
            let preview: String = reply.chars().take(DEMO_PREVIEW_CHARS).collect();
            writeln!(output, "Bot: {}...", preview)?;
        } else {
            writeln!(output, "Bot: {}", reply)?;
        }
    }

    conversation.reset_after_completion();
    writeln!(output, "\n✅ Testing completed!")?;
    Ok(())
}
