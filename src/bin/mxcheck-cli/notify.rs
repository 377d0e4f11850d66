use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use mxcheck_lib::notify::{TelegramNotifier, text_preview};

use crate::{EXIT_INPUT, EXIT_OK};
use crate::args::TelegramFlags;

pub fn run(file: &Path, flags: &TelegramFlags) -> Result<u8> {
    if flags.bot_token.is_empty() {
        eprintln!("Missing --bot-token (or TELEGRAM_BOT_TOKEN)");
        return Ok(EXIT_INPUT);
    }
    if flags.chat_id.is_empty() {
        eprintln!("Missing --chat-id (or TELEGRAM_CHAT_ID)");
        return Ok(EXIT_INPUT);
    }

    let text = match fs::read_to_string(file) {
        Ok(content) => content.trim_matches('\n').to_string(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("File not found: {}", file.display());
            return Ok(EXIT_INPUT);
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", file.display())),
    };
    if text.trim().is_empty() {
        eprintln!("Input file is empty");
        return Ok(EXIT_INPUT);
    }

    if flags.dry_run {
        println!("DRY RUN");
        println!("chat_id={}", flags.chat_id);
        println!("text_preview={:?}", text_preview(&text));
        return Ok(EXIT_OK);
    }

    let notifier = TelegramNotifier::new(flags.timeout)?;
    notifier
        .send_message(&flags.bot_token, &flags.chat_id, &text)
        .context("send Telegram message")?;
    println!("OK");
    Ok(EXIT_OK)
}
