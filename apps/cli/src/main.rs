use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use shortsmith_core::{
    PromptedVideo, ShortsmithError, VideoRecord, export_csv, export_json, export_zip,
    format_views, load_videos, prompt_video,
};

/// Which export artifacts to write
#[derive(Clone, Default, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
    Zip,
    #[default]
    All,
}

impl ExportFormat {
    fn wants_json(&self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::All)
    }

    fn wants_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::All)
    }

    fn wants_zip(&self) -> bool {
        matches!(self, ExportFormat::Zip | ExportFormat::All)
    }
}

#[derive(Parser)]
#[command(name = "shortsmith")]
#[command(about = "Turn viral short-form video metadata into AI-ready script prompts")]
struct Cli {
    /// JSON file containing an array of video records
    input: PathBuf,

    /// Directory to write export artifacts into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Export artifacts to write
    #[arg(short, long, default_value = "all")]
    format: ExportFormat,

    /// Number of records shown in the preview table
    #[arg(long, default_value_t = 10)]
    preview: usize,

    /// Number of sample prompts printed after generation
    #[arg(long, default_value_t = 3)]
    samples: usize,
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/dim}] {pos}/{len}")
            .unwrap()
            .progress_chars("━╸─"),
    );
    pb
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

fn print_preview(videos: &[VideoRecord], limit: usize) {
    if limit == 0 || videos.is_empty() {
        return;
    }

    println!(
        "\n{}",
        style(format!(
            "{:<44} {:>12} {:>8}  {:<24} {}",
            "Title", "Views", "Dur (s)", "Niche", "Keyword"
        ))
        .bold()
    );
    println!("{}", style("─".repeat(100)).dim());
    for video in videos.iter().take(limit) {
        println!(
            "{:<44} {:>12} {:>8}  {:<24} {}",
            truncate_chars(video.video_title.trim(), 42),
            format_views(video.views),
            video.duration_sec,
            truncate_chars(video.niche.trim(), 22),
            video.keyword.trim()
        );
    }
    println!();
}

fn print_samples(prompts: &[PromptedVideo], limit: usize) {
    if limit == 0 || prompts.is_empty() {
        return;
    }

    println!("\n{}", style("Sample Prompts").bold());
    for (i, prompt) in prompts.iter().take(limit).enumerate() {
        println!(
            "\n{} {}",
            style(format!("#{}", i + 1)).cyan().bold(),
            style(truncate_chars(&prompt.video_title, 60)).bold()
        );
        println!(
            "{} {}  {} {}  {} {} sec",
            style("ID:").dim(),
            prompt.video_id,
            style("Views:").dim(),
            format_views(prompt.views),
            style("Duration:").dim(),
            prompt.duration_sec
        );
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", prompt.generated_prompt);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("shortsmith").cyan().bold(),
        style("Prompt Generator").dim()
    );

    // Step 1: Load records; a malformed payload aborts before any record
    // is processed
    let videos = match load_videos(&cli.input).await {
        Ok(videos) => videos,
        Err(e @ ShortsmithError::InvalidInput(_)) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    println!(
        "{} Loaded {} videos",
        style("✓").green().bold(),
        style(videos.len()).yellow()
    );

    // Step 2: Preview
    print_preview(&videos, cli.preview);

    // Step 3: Generate prompts
    let pb = create_progress_bar(videos.len() as u64);
    pb.set_message("Generating prompts");
    let mut prompts = Vec::with_capacity(videos.len());
    for video in &videos {
        prompts.push(prompt_video(video));
        pb.inc(1);
    }
    pb.finish_and_clear();
    println!(
        "{} Generated {} prompts",
        style("✓").green().bold(),
        style(prompts.len()).yellow()
    );

    // Step 4: Write export artifacts
    fs::create_dir_all(&cli.output).await?;

    if cli.format.wants_json() {
        let path = cli.output.join("generated_prompts.json");
        fs::write(&path, export_json(&prompts)?).await?;
        println!(
            "{} Wrote {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
    }

    if cli.format.wants_csv() {
        let path = cli.output.join("generated_prompts.csv");
        fs::write(&path, export_csv(&prompts)).await?;
        println!(
            "{} Wrote {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
    }

    if cli.format.wants_zip() {
        let path = cli.output.join("prompts.zip");
        fs::write(&path, export_zip(&prompts)?).await?;
        println!(
            "{} Wrote {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
    }

    // Step 5: Sample prompts
    print_samples(&prompts, cli.samples);

    Ok(())
}
