use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Make sure the signed-in user has a profile, creating it if needed
    Ensure {
        /// User ID issued by the identity provider
        #[arg(long)]
        user_id: String,
        /// Email claim from signup
        #[arg(long)]
        email: Option<String>,
        /// Display name claim from signup
        #[arg(long)]
        full_name: Option<String>,
    },

    /// Look a profile up once, without creating anything
    Resolve {
        /// User ID issued by the identity provider
        #[arg(long)]
        user_id: String,
    },
}
