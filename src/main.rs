use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use kwinsight::models::{CompetitionLevel, EnrichedKeyword, ScoreTier, Trend};
use kwinsight::{
    best_opportunity, Config, InsightPipeline, JsonFileSource, KeywordFilter, PipelineConfig,
    SortKey,
};

#[derive(Parser, Debug)]
#[command(name = "kwinsight")]
#[command(version = "0.1.0")]
#[command(about = "Score keyword opportunities, growth and seasonality from keyword research data")]
struct Args {
    /// JSON files with keyword records (repeatable)
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Minimum monthly search volume
    #[arg(long, default_value = "0")]
    min_volume: f64,

    /// Only keep keywords with this competition level
    #[arg(long, value_enum)]
    competition: Option<CompetitionArg>,

    /// Only keep keywords with this trend
    #[arg(long, value_enum)]
    trend: Option<TrendArg>,

    /// Sort order (descending)
    #[arg(long, value_enum, default_value = "score")]
    sort_by: SortArg,

    /// Maximum keywords to show (defaults to KWINSIGHT_DISPLAY_LIMIT or 50)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Maximum input files read at once
    #[arg(long)]
    concurrency: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompetitionArg {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TrendArg {
    Growing,
    Declining,
    Stable,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Score,
    Volume,
    Cpc,
    Growth,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr, the report owns stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("kwinsight=info".parse()?))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(concurrency) = args.concurrency {
        config.concurrency_limit = concurrency.max(1);
    }

    // Build filter from CLI options
    let filter = KeywordFilter {
        min_volume: args.min_volume,
        competition: args.competition.map(|c| match c {
            CompetitionArg::Low => CompetitionLevel::Low,
            CompetitionArg::Medium => CompetitionLevel::Medium,
            CompetitionArg::High => CompetitionLevel::High,
        }),
        trend: args.trend.map(|t| match t {
            TrendArg::Growing => Trend::Growing,
            TrendArg::Declining => Trend::Declining,
            TrendArg::Stable => Trend::Stable,
        }),
        sort_by: match args.sort_by {
            SortArg::Score => SortKey::OpportunityScore,
            SortArg::Volume => SortKey::SearchVolume,
            SortArg::Cpc => SortKey::Cpc,
            SortArg::Growth => SortKey::GrowthRate,
        },
        limit: args.limit.unwrap_or(config.display_limit),
    };

    // Create pipeline
    let mut pipeline = InsightPipeline::new(PipelineConfig::from(&config)).with_progress(true);
    for input in &args.inputs {
        pipeline = pipeline.with_source(JsonFileSource::new(input));
    }

    // Run analysis
    tracing::info!("Analyzing keywords from {} input file(s)", args.inputs.len());
    let keywords = pipeline.run(&filter).await?;

    // Output results
    let output = match args.format {
        Format::Text => format_text(&keywords),
        Format::Markdown => format_markdown(&keywords),
    };
    println!("{}", output);

    Ok(())
}

fn tier_marker(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "[+]",
        ScoreTier::Moderate => "[~]",
        ScoreTier::Low => "[-]",
    }
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Growing => "↑",
        Trend::Declining => "↓",
        Trend::Stable => "→",
    }
}

fn format_text(keywords: &[EnrichedKeyword]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Keyword Insights ({} keywords) ===\n\n", keywords.len()));

    if keywords.is_empty() {
        output.push_str("No keywords match the current filters.\n");
        return output;
    }

    for kw in keywords {
        let insight = &kw.insight;
        output.push_str(&format!(
            "{} {} - score {:.1}/10 ({})\n",
            tier_marker(insight.score_tier()),
            kw.record.keyword,
            insight.opportunity_score,
            insight.score_tier()
        ));
        output.push_str(&format!(
            "    Volume: {:.0}/month | CPC: ${:.2} | Competition: {} | Growth: {} {:+.1}%\n",
            kw.search_volume(),
            kw.cpc(),
            kw.record.competition_level,
            trend_marker(insight.trend()),
            insight.growth_rate
        ));
        if insight.is_seasonal {
            let peaks = kw.peak_summary();
            if peaks.is_empty() {
                output.push_str("    Seasonal keyword\n");
            } else {
                output.push_str(&format!("    Peaks: {}\n", peaks));
            }
        }
        output.push_str(&format!("    {}\n\n", insight.recommendation));
    }

    if let Some(best) = best_opportunity(keywords) {
        output.push_str(&format!(
            "Recommendation: '{}' has the highest opportunity score ({:.1}/10)\n",
            best.record.keyword, best.insight.opportunity_score
        ));
    }

    output
}

fn format_markdown(keywords: &[EnrichedKeyword]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Keyword Insights ({} keywords)\n\n", keywords.len()));

    if keywords.is_empty() {
        output.push_str("_No keywords match the current filters._\n");
        return output;
    }

    output.push_str("| Keyword | Volume | CPC | Competition | Score | Growth | Peaks |\n");
    output.push_str("|---------|--------|-----|-------------|-------|--------|-------|\n");

    for kw in keywords {
        output.push_str(&format!(
            "| {} | {:.0} | ${:.2} | {} | {:.1} | {:+.1}% | {} |\n",
            kw.record.keyword,
            kw.search_volume(),
            kw.cpc(),
            kw.record.competition_level,
            kw.insight.opportunity_score,
            kw.insight.growth_rate,
            kw.peak_summary()
        ));
    }

    if let Some(best) = best_opportunity(keywords) {
        output.push_str(&format!(
            "\n**Recommendation:** '{}' has the highest opportunity score ({:.1}/10)\n",
            best.record.keyword, best.insight.opportunity_score
        ));
    }

    output.push_str("\n## Detailed Insights\n");

    for kw in keywords {
        output.push_str(&format!("\n### {}\n\n", kw.record.keyword));
        output.push_str(&format!("{}\n\n", kw.insight.recommendation));

        if kw.insight.is_seasonal {
            output.push_str("- Seasonal keyword\n");
            if !kw.insight.peak_months.is_empty() {
                output.push_str(&format!("- Peak months: {}\n", kw.insight.peak_months.join(", ")));
            }
            if !kw.insight.low_months.is_empty() {
                output.push_str(&format!("- Low months: {}\n", kw.insight.low_months.join(", ")));
            }
        } else {
            output.push_str("- Stable year-round\n");
        }

        let mut monthly: Vec<_> = kw
            .record
            .monthly_searches
            .iter()
            .filter_map(|m| {
                Some((
                    m.year.as_f64()? as i64,
                    m.month.as_f64()? as i64,
                    m.search_volume.as_f64(),
                ))
            })
            .collect();

        if !monthly.is_empty() {
            monthly.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
            output.push_str("\n| Month | Search Volume |\n|-------|---------------|\n");
            for (year, month, volume) in monthly {
                let volume = volume
                    .map(|v| format!("{:.0}", v))
                    .unwrap_or_else(|| "n/a".to_string());
                output.push_str(&format!("| {}/{} | {} |\n", month, year, volume));
            }
        }
    }

    output
}
