//! Discord binding for the welcome bot.
//!
//! The bot registers the slash commands on connect, routes member joins to the welcome
//! delivery service and answers a couple of prefix commands.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel cache used to resolve names and channels
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_MESSAGES` - Messages for prefix commands
//! - `MESSAGE_CONTENT` - Content of those messages (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod command;
pub mod handler;
pub mod messenger;
pub mod start;
