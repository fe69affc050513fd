use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use listing_desk::config::AppConfig;
use listing_desk::error::AppError;
use listing_desk::listings::{
    sample_book, Agent, Balcony, BookSummary, FencedYard, FieldParseError, Furnished, Garage,
    Laundry, ListingCsvImporter, ListingDraft, PaymentType, PropertyDetails, PropertyDraft,
    PropertyType, TermsDraft, Transaction, UnitDraft,
};
use listing_desk::telemetry;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Desk",
    about = "Capture real-estate listings at the console and answer inventory and price queries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive capture session (default command)
    Session(SessionArgs),
    /// Inspect a listing book without prompts
    Book {
        #[command(subcommand)]
        command: BookCommand,
    },
}

#[derive(Args, Debug, Default)]
struct SessionArgs {
    /// Override the configured number of listings to capture
    #[arg(long)]
    listings: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum BookCommand {
    /// Summarize a book and its cheapest purchases
    Report(BookReportArgs),
}

#[derive(Args, Debug)]
struct BookReportArgs {
    /// Listing CSV export to load instead of the built-in sample book
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Price ceiling for the cheap-purchase query (omit for ties at the minimum)
    #[arg(long)]
    max_price: Option<i64>,
    /// Include every listing sheet in the output
    #[arg(long)]
    list_all: bool,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BookReportPayload {
    generated_on: NaiveDate,
    data_source: BookDataSource,
    max_price: Option<i64>,
    summary: BookSummary,
    cheapest_purchases: Vec<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listings: Option<Vec<Transaction>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum BookDataSource {
    Sample,
    Csv,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Session(SessionArgs::default()));

    match command {
        Command::Session(args) => run_session(args, &config),
        Command::Book {
            command: BookCommand::Report(args),
        } => run_book_report(args),
    }
}

fn run_session(args: SessionArgs, config: &AppConfig) -> Result<(), AppError> {
    let listings = args.listings.unwrap_or(config.session.listings);
    info!(?config.environment, listings, "starting capture session");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session_io(&mut input, &mut output, listings)
}

fn run_session_io<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    listings: usize,
) -> Result<(), AppError> {
    writeln!(output, "Creating a property example from '150', '2', '1'")?;
    let example = PropertyDetails {
        square_feet: "150".to_string(),
        bedrooms: "2".to_string(),
        baths: "1".to_string(),
    };
    writeln!(output, "Displaying property:")?;
    writeln!(output)?;
    write!(output, "{example}")?;

    let mut agent = Agent::new();
    writeln!(output)?;
    writeln!(output, "Please add {listings} listings to the agent's book")?;
    for index in 1..=listings {
        writeln!(output, "{index}")?;
        let transaction = capture_listing(input, output)?;
        agent.add_transaction(transaction);
    }

    writeln!(output)?;
    writeln!(output, "Displaying listings.")?;
    for transaction in agent.transactions() {
        writeln!(output)?;
        write!(output, "{transaction}")?;
    }

    writeln!(output)?;
    writeln!(
        output,
        "Houses count {}",
        agent.count_by_property_type(PropertyType::House)
    )?;
    writeln!(
        output,
        "Apartments count {}",
        agent.count_by_property_type(PropertyType::Apartment)
    )?;

    writeln!(output)?;
    writeln!(output, "Looking for cheap purchases..")?;
    let ceiling = prompt_ceiling(input, output)?;
    let cheapest = agent.cheapest_purchases(ceiling)?;
    if cheapest.is_empty() {
        writeln!(output, "No matching purchases.")?;
    } else {
        for transaction in cheapest {
            writeln!(output)?;
            write!(output, "{transaction}")?;
        }
    }

    writeln!(output)?;
    writeln!(output, "All right.")?;
    Ok(())
}

/// Capture one listing: the two discriminants first, then the financial
/// terms, then the property fields.
fn capture_listing<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Transaction, AppError> {
    let property_type: PropertyType = prompt_word(
        input,
        output,
        "What type of property?",
        PropertyType::WORDS,
    )?;
    let payment_type: PaymentType =
        prompt_word(input, output, "What payment type?", PaymentType::WORDS)?;

    let terms = match payment_type {
        PaymentType::Purchase => TermsDraft::Purchase {
            price: prompt_line(input, output, "What is the selling price? ")?,
            taxes: prompt_line(input, output, "What are the estimated taxes? ")?,
        },
        PaymentType::Rental => {
            let rent = prompt_line(input, output, "What is the monthly rent? ")?;
            let utilities = prompt_line(input, output, "What are the estimated utilities? ")?;
            let furnished: Furnished = prompt_word(
                input,
                output,
                "Is the property furnished?",
                Furnished::WORDS,
            )?;
            TermsDraft::Rental {
                rent,
                utilities,
                furnished: furnished.label().to_string(),
            }
        }
    };

    let property = PropertyDraft {
        square_feet: prompt_line(input, output, "Enter the square feet: ")?,
        bedrooms: prompt_line(input, output, "Enter number of bedrooms: ")?,
        baths: prompt_line(input, output, "Enter number of baths: ")?,
    };

    let unit = match property_type {
        PropertyType::Apartment => {
            let laundry: Laundry = prompt_word(
                input,
                output,
                "What laundry facilities does the property have?",
                Laundry::WORDS,
            )?;
            let balcony: Balcony = prompt_word(
                input,
                output,
                "Does the property have a balcony?",
                Balcony::WORDS,
            )?;
            UnitDraft::Apartment {
                laundry: laundry.label().to_string(),
                balcony: balcony.label().to_string(),
            }
        }
        PropertyType::House => {
            let fenced_yard: FencedYard =
                prompt_word(input, output, "Is the yard fenced?", FencedYard::WORDS)?;
            let garage: Garage =
                prompt_word(input, output, "Is there a garage?", Garage::WORDS)?;
            let stories = prompt_line(input, output, "How many stories? ")?;
            UnitDraft::House {
                stories,
                garage: garage.label().to_string(),
                fenced_yard: fenced_yard.label().to_string(),
            }
        }
    };

    let transaction = ListingDraft {
        property,
        unit,
        terms,
    }
    .build()?;
    Ok(transaction)
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, AppError> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the session finished",
        )));
    }

    Ok(line.trim().to_string())
}

/// Ask `question` with its allowed words appended, re-asking until one of
/// them is entered. The parse error doubles as the retry message.
fn prompt_word<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    words: &[&str],
) -> Result<T, AppError>
where
    T: FromStr<Err = FieldParseError>,
    R: BufRead,
    W: Write,
{
    let label = format!("{} ({}) ", question, words.join(", "));
    loop {
        match prompt_line(input, output, &label)?.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Blank keeps the ties-at-minimum mode; anything else must be a whole number.
fn prompt_ceiling<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<i64>, AppError> {
    loop {
        let raw = prompt_line(
            input,
            output,
            "Enter maximum price (blank for ties at the minimum): ",
        )?;
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "'{raw}' is not a whole number")?,
        }
    }
}

fn run_book_report(args: BookReportArgs) -> Result<(), AppError> {
    let BookReportArgs {
        csv,
        max_price,
        list_all,
        json,
    } = args;

    let (agent, data_source) = match csv {
        Some(path) => {
            info!(path = %path.display(), "loading listing export");
            let mut agent = Agent::new();
            for transaction in ListingCsvImporter::from_path(path)? {
                agent.add_transaction(transaction);
            }
            (agent, BookDataSource::Csv)
        }
        None => (sample_book(), BookDataSource::Sample),
    };

    let payload = build_report_payload(&agent, data_source, max_price, list_all)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_book_report(&payload);
    }

    Ok(())
}

fn build_report_payload(
    agent: &Agent,
    data_source: BookDataSource,
    max_price: Option<i64>,
    list_all: bool,
) -> Result<BookReportPayload, AppError> {
    let cheapest_purchases = agent
        .cheapest_purchases(max_price)?
        .into_iter()
        .cloned()
        .collect();
    let listings = list_all.then(|| agent.transactions().to_vec());

    Ok(BookReportPayload {
        generated_on: Local::now().date_naive(),
        data_source,
        max_price,
        summary: agent.summary(),
        cheapest_purchases,
        listings,
    })
}

fn render_book_report(payload: &BookReportPayload) {
    println!("Listing book report ({})", payload.generated_on);
    match payload.data_source {
        BookDataSource::Sample => println!("Data source: built-in sample book"),
        BookDataSource::Csv => println!("Data source: listing CSV export"),
    }

    let summary = &payload.summary;
    println!("\nBook summary");
    println!("- listings: {}", summary.total);
    println!("- apartments: {}", summary.apartments);
    println!("- houses: {}", summary.houses);
    println!("- purchases: {}", summary.purchases);
    println!("- rentals: {}", summary.rentals);

    match payload.max_price {
        Some(ceiling) => println!("\nPurchases priced below {ceiling}"),
        None => println!("\nPurchases tied at the minimum price"),
    }
    if payload.cheapest_purchases.is_empty() {
        println!("- none");
    } else {
        for transaction in &payload.cheapest_purchases {
            println!();
            print!("{transaction}");
        }
    }

    if let Some(listings) = &payload.listings {
        println!("\nEvery listing");
        for transaction in listings {
            println!();
            print!("{transaction}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_word_retries_until_a_valid_word() {
        let mut input = Cursor::new("dishwasher\ncoin\n");
        let mut output = Vec::new();

        let laundry: Laundry = prompt_word(
            &mut input,
            &mut output,
            "What laundry facilities does the property have?",
            Laundry::WORDS,
        )
        .expect("second answer is valid");

        assert_eq!(laundry, Laundry::Coin);
        let transcript = String::from_utf8(output).expect("utf8 transcript");
        assert!(transcript.contains("(coin, ensuite, none)"));
        assert!(transcript.contains("invalid laundry 'dishwasher'"));
    }

    #[test]
    fn prompt_ceiling_blank_means_ties_mode() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let ceiling = prompt_ceiling(&mut input, &mut output).expect("blank accepted");
        assert_eq!(ceiling, None);
    }

    #[test]
    fn prompt_ceiling_retries_on_non_numeric_input() {
        let mut input = Cursor::new("lots\n180\n");
        let mut output = Vec::new();

        let ceiling = prompt_ceiling(&mut input, &mut output).expect("second answer is valid");
        assert_eq!(ceiling, Some(180));
        let transcript = String::from_utf8(output).expect("utf8 transcript");
        assert!(transcript.contains("'lots' is not a whole number"));
    }

    #[test]
    fn prompt_line_reports_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let error = prompt_line(&mut input, &mut output, "anything: ")
            .expect_err("closed input is an error");
        assert!(matches!(error, AppError::Io(_)));
    }

    #[test]
    fn capture_listing_builds_a_house_purchase() {
        let mut input = Cursor::new("house\npurchase\n250000\n1500\n2000\n3\n2\nyes\nattached\n2\n");
        let mut output = Vec::new();

        let transaction =
            capture_listing(&mut input, &mut output).expect("scripted answers build");

        assert_eq!(transaction.property_type(), PropertyType::House);
        assert_eq!(transaction.payment_type(), PaymentType::Purchase);
        assert_eq!(transaction.property.details.square_feet, "2000");
        assert_eq!(transaction.purchase_price(), Some("250000"));
    }

    #[test]
    fn capture_listing_builds_an_apartment_rental() {
        let mut input = Cursor::new("apartment\nrental\n1100\n150\nno\n700\n1\n1\ncoin\nno\n");
        let mut output = Vec::new();

        let transaction =
            capture_listing(&mut input, &mut output).expect("scripted answers build");

        assert_eq!(transaction.property_type(), PropertyType::Apartment);
        assert_eq!(transaction.payment_type(), PaymentType::Rental);
        assert_eq!(transaction.purchase_price(), None);
    }

    #[test]
    fn session_flow_reports_counts_and_cheapest() {
        let script = "house\npurchase\n250000\n1500\n2000\n3\n2\nyes\nattached\n2\n\
                      apartment\nrental\n1100\n150\nno\n700\n1\n1\ncoin\nno\n\
                      \n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        run_session_io(&mut input, &mut output, 2).expect("scripted session completes");

        let transcript = String::from_utf8(output).expect("utf8 transcript");
        assert!(transcript.contains("Houses count 1"));
        assert!(transcript.contains("Apartments count 1"));
        assert!(transcript.contains("selling price: 250000"));
        assert!(transcript.contains("All right."));
    }

    #[test]
    fn report_payload_serializes_documented_keys() {
        let agent = sample_book();
        let payload = build_report_payload(&agent, BookDataSource::Sample, Some(150000), false)
            .expect("sample prices are numeric");

        let value = serde_json::to_value(&payload).expect("payload serializes");
        let object = value.as_object().expect("payload is an object");

        assert!(object.contains_key("generated_on"));
        assert_eq!(object["data_source"], "sample");
        assert_eq!(object["max_price"], 150000);
        assert_eq!(object["summary"]["total"], 5);
        assert_eq!(
            object["cheapest_purchases"]
                .as_array()
                .expect("array")
                .len(),
            2
        );
        assert!(!object.contains_key("listings"));
    }
}
