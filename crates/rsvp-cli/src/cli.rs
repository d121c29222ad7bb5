//! Command-line argument definitions (Clap).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rsvp")]
#[command(about = "RSVP - wedding invitation control panel and guest replies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print view models as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in as an administrator
    Login {
        /// Administrator username
        username: String,

        /// Password; read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show backend health and session state
    Status,

    /// Open a client route such as `/control_panel` or `/rsvp/{id}`
    Open {
        /// Route path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Manage invitation categories
    #[command(subcommand)]
    Categories(CategoryCommand),

    /// Manage invitations
    #[command(subcommand)]
    Invitations(InvitationCommand),

    /// Manage RSVPs
    #[command(subcommand)]
    Rsvps(RsvpCommand),

    /// Guest RSVP page
    #[command(subcommand)]
    Guest(GuestCommand),
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List categories
    List,
    /// Create a category
    Create {
        /// Category tag
        tag: String,
    },
    /// Rename a category
    Edit {
        id: i64,
        /// New tag
        tag: String,
    },
    /// Delete an empty category
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Invitation fields; unset fields keep the form's current values.
#[derive(Debug, Default, Args)]
pub struct InvitationFields {
    /// Category id
    #[arg(long)]
    pub category: Option<i64>,
    /// How the guest party is addressed
    #[arg(long)]
    pub greeting: Option<String>,
    /// Maximum number of guests
    #[arg(long = "max-guests")]
    pub max_guests: Option<u32>,
    /// Mobile phone number for SMS delivery
    #[arg(long)]
    pub phone: Option<String>,
    /// Administrator notes
    #[arg(long)]
    pub notes: Option<String>,
    /// Status code (NS, ST, RA, RN); edit only
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum InvitationCommand {
    /// List invitations
    List,
    /// Create an invitation
    Create(InvitationFields),
    /// Edit an invitation
    Edit {
        id: i64,
        #[command(flatten)]
        fields: InvitationFields,
    },
    /// Delete an invitation
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Text the private link to the invitation's phone
    Sms { id: i64 },
    /// Print the shareable invitation message
    Share { id: i64 },
}

/// RSVP fields; unset fields keep the form's current values.
#[derive(Debug, Default, Args)]
pub struct RsvpFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Whether the party attends (true/false)
    #[arg(long)]
    pub attending: Option<bool>,
    /// Number of guests
    #[arg(long)]
    pub guests: Option<u32>,
    /// Special dietary requirements (true/false)
    #[arg(long = "special-diet")]
    pub special_diet: Option<bool>,
    /// Remarks
    #[arg(long)]
    pub remarks: Option<String>,
    /// Mobile phone number
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum RsvpCommand {
    /// List RSVPs
    List,
    /// Create an RSVP on behalf of a guest
    Create {
        /// Private id of the invitation
        #[arg(long = "invitation")]
        invitation_private_id: Option<String>,
        #[command(flatten)]
        fields: RsvpFields,
    },
    /// Edit an RSVP
    Edit {
        id: i64,
        #[command(flatten)]
        fields: RsvpFields,
    },
    /// Delete an RSVP
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GuestCommand {
    /// Show the guest page, optionally for one invitation
    Show {
        /// Invitation private id
        private_id: Option<String>,
    },
    /// Reply to an invitation (or publicly, without a private id)
    Reply {
        /// Invitation private id
        #[arg(long = "invitation")]
        private_id: Option<String>,
        /// Anti-bot challenge token
        #[arg(long)]
        recaptcha: String,
        #[command(flatten)]
        fields: RsvpFields,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invitation_create() {
        let cli = Cli::try_parse_from([
            "rsvp",
            "invitations",
            "create",
            "--category",
            "1",
            "--greeting",
            "Mr and Mrs Tan",
            "--max-guests",
            "2",
        ])
        .expect("parse");

        match cli.command {
            Commands::Invitations(InvitationCommand::Create(fields)) => {
                assert_eq!(fields.category, Some(1));
                assert_eq!(fields.greeting.as_deref(), Some("Mr and Mrs Tan"));
                assert_eq!(fields.max_guests, Some(2));
                assert!(fields.phone.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rsvp", "categories", "list", "--json", "-v"]).expect("parse");
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Categories(CategoryCommand::List)));
    }

    #[test]
    fn test_guest_reply_requires_token() {
        assert!(Cli::try_parse_from(["rsvp", "guest", "reply", "--name", "Jane"]).is_err());
    }
}
