use clap::{Args, Subcommand, ValueEnum};
use wrapped_core::AwardFilter;
use wrapped_db::{SongSpotlight, UserSpotlight};

#[derive(Clone, Debug, Args)]
pub struct UsersArgs {
    /// Only the ten users with the most plays
    #[arg(long)]
    pub most_active: bool,
}

#[derive(Clone, Debug, Args)]
pub struct UserArgs {
    /// User name
    pub name: String,
    /// Date of birth (YYYYMMDD)
    pub dob: i64,
    /// Which spotlight report to show
    #[arg(value_enum, default_value = "recent")]
    pub view: UserView,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum UserView {
    Recent,
    TopSongs,
    TopGenres,
    Recommend,
}

impl From<UserView> for UserSpotlight {
    fn from(view: UserView) -> Self {
        match view {
            UserView::Recent => Self::RecentlyPlayedSongs,
            UserView::TopSongs => Self::MostPlayedSongs,
            UserView::TopGenres => Self::MostPlayedGenres,
            UserView::Recommend => Self::SongRecommendations,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct SongsArgs {
    /// Only the ten songs with the most plays
    #[arg(long)]
    pub most_played: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SongArgs {
    /// Song name
    pub name: String,
    /// Release year
    pub release: i64,
    /// Which spotlight report to show
    #[arg(value_enum, default_value = "listeners")]
    pub view: SongView,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SongView {
    Listeners,
    Common,
}

impl From<SongView> for SongSpotlight {
    fn from(view: SongView) -> Self {
        match view {
            SongView::Listeners => Self::TopListeners,
            SongView::Common => Self::CommonListeners,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum ArtistCommands {
    /// Artists with the most releases in a year range
    Releases(ReleasesArgs),
    /// Artists that are members of a band
    InBands,
}

#[derive(Clone, Debug, Args)]
pub struct ReleasesArgs {
    /// First release year (inclusive)
    #[arg(long)]
    pub from: i32,
    /// Last release year (inclusive)
    #[arg(long)]
    pub to: i32,
    /// Whether the artists have won an award
    #[arg(long, value_enum)]
    pub award: AwardArg,
    /// Count album releases instead of song releases
    #[arg(long)]
    pub albums: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AwardArg {
    Yes,
    No,
}

impl AwardArg {
    #[must_use]
    pub const fn filter(self) -> AwardFilter {
        AwardFilter::from_bool(matches!(self, Self::Yes))
    }
}

#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct BandsArgs {
    /// Order by number of albums, with album counts
    #[arg(long)]
    pub most_albums: bool,

    #[command(subcommand)]
    pub action: Option<BandCommands>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum BandCommands {
    /// Bands whose songs in a genre were played the most in a year
    Hits(GenreYearArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum AlbumCommands {
    /// Albums with songs in a genre most added to libraries since a year
    Featured(GenreYearArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenreYearArgs {
    #[arg(long)]
    pub year: i32,
    #[arg(long)]
    pub genre: String,
}
