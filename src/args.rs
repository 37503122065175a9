use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "harvest-image")]
#[command(about = "Download the images linked from an HTML page")]
#[command(version)]
pub struct Args {
    /// URL of the HTML page
    pub url: String,

    /// CSS class of the main element to constrain the image search
    #[arg(short, long)]
    pub class: Option<String>,

    /// HTML id of the main element to constrain the image search
    #[arg(short, long)]
    pub id: Option<String>,

    /// HTML tags to search for image links, comma separated (e.g. "a,img")
    #[arg(short, long, value_enum, value_delimiter = ',', default_values = ["a", "img"])]
    pub tags: Vec<TagArg>,

    /// Output directory, defaults to the URL basename
    #[arg(short, long)]
    pub out: Option<String>,

    /// Print the list of image links and exit without downloading
    #[arg(short, long)]
    pub list: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Number of concurrent downloads
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TagArg {
    /// Anchors that wrap an image
    A,
    /// Image elements
    Img,
}

/// Convert CLI tag arguments to the tag names the library understands
pub fn convert_tags(tags: &[TagArg]) -> Vec<String> {
    tags.iter()
        .map(|tag| match tag {
            TagArg::A => "a".to_string(),
            TagArg::Img => "img".to_string(),
        })
        .collect()
}
