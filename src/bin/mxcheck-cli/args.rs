use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mxcheck_lib::CheckOptions;

#[derive(Parser)]
#[command(
    name = "mxcheck-cli",
    version,
    about = "vérifie domaine, MX et acceptation SMTP d'une liste d'adresses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,

    /// niveau de log: error|warn|info|debug|trace (RUST_LOG prioritaire)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// vérifie chaque adresse du fichier (domaine, MX, RCPT TO)
    #[command(name = "email-check")]
    EmailCheck(EmailCheckArgs),
    /// envoie le contenu d'un fichier texte dans un chat Telegram
    #[cfg(feature = "with-notify")]
    #[command(name = "telegram-send")]
    TelegramSend(TelegramSendArgs),
    /// email-check puis, en cas de succès, telegram-send
    #[cfg(feature = "with-notify")]
    All(AllArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EmailCheckArgs {
    /// fichier texte, une adresse par ligne
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub check: CheckFlags,
}

#[derive(Args, Debug, Clone)]
pub struct CheckFlags {
    /// timeout DNS par requête (secondes)
    #[arg(long, default_value = "4", value_parser = parse_seconds)]
    pub dns_timeout: Duration,

    /// timeout SMTP connexion et commandes (secondes)
    #[arg(long, default_value = "6", value_parser = parse_seconds)]
    pub smtp_timeout: Duration,

    /// saute l'étape SMTP
    #[arg(long)]
    pub no_smtp: bool,

    /// nom annoncé dans EHLO/HELO
    #[arg(long, default_value = "localhost")]
    pub helo_host: String,

    /// enveloppe MAIL FROM
    #[arg(long, default_value = "no-reply@example.com")]
    pub mail_from: String,

    /// pause entre deux vérifications (secondes)
    #[arg(long, default_value = "0", value_parser = parse_seconds)]
    pub sleep: Duration,

    /// format: human|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl CheckFlags {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            dns_timeout: self.dns_timeout,
            smtp_timeout: self.smtp_timeout,
            helo_host: self.helo_host.clone(),
            mail_from: self.mail_from.clone(),
            smtp_enabled: !self.no_smtp,
            delay: self.sleep,
            ..CheckOptions::default()
        }
    }
}

#[cfg(feature = "with-notify")]
#[derive(Args, Debug, Clone)]
pub struct TelegramSendArgs {
    /// fichier .txt à envoyer
    #[arg(long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub telegram: TelegramFlags,
}

#[cfg(feature = "with-notify")]
#[derive(Args, Debug, Clone)]
pub struct TelegramFlags {
    /// jeton du bot
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", default_value = "", hide_env_values = true)]
    pub bot_token: String,

    /// chat_id destinataire
    #[arg(long, env = "TELEGRAM_CHAT_ID", default_value = "")]
    pub chat_id: String,

    /// timeout HTTP (secondes)
    #[arg(long, default_value = "10", value_parser = parse_seconds)]
    pub timeout: Duration,

    /// n'envoie rien, affiche un aperçu
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "with-notify")]
#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    /// fichier texte, une adresse par ligne
    #[arg(long)]
    pub emails_input: PathBuf,

    /// fichier .txt à envoyer
    #[arg(long)]
    pub message_file: PathBuf,

    #[command(flatten)]
    pub check: CheckFlags,

    #[command(flatten)]
    pub telegram: TelegramFlags,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Non-negative, finite number of seconds.
pub fn parse_seconds(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' n'est pas un nombre de secondes"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("durée invalide: '{raw}'"))
}
