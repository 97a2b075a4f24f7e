//! CLI for managing cards, fund operations and reports.

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use ewallet_rs::format::{format_currency, locale_date};
use ewallet_rs::fund::{FundRequest, parse_amount};
use ewallet_rs::models::{
    Card, CardDetails, CardKind, CardPatch, CategoryList, Document, NaiveDate, NaiveDateTime,
    Operation, SummaryPatch, Transaction,
};
use ewallet_rs::reports::{
    self, CardTotal, CategoryTotal, WeeklyReport, card_rollup, category_rollup,
    export_card_history, weekly_report,
};
use ewallet_rs::storage::{DocumentStorage, FileStorage, QueuedStorage};
use ewallet_rs::store::{Command as Action, Store};
use owo_colors::OwoColorize;

/// Environment variable overriding the data directory.
const DATA_DIR_ENV: &str = "EWALLET_DATA_DIR";

/// eWallet: track debit and credit cards, fund operations and reports.
#[derive(Debug, Parser)]
#[command(name = "ewallet", version, about)]
struct Cli {
    /// Override the storage directory (default: $EWALLET_DATA_DIR, then
    /// the XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Manage cards.
    #[command(subcommand)]
    Cards(CardCommand),
    /// Add money to or subtract money from a card.
    Fund(FundArgs),
    /// Show the fund history, optionally for one card.
    History {
        /// Card ID or name (case-insensitive).
        #[arg(long)]
        card: Option<String>,
    },
    /// Delete every history row of a card.
    Purge {
        /// Card ID or name (case-insensitive).
        card: String,
    },
    /// Print or save the shareable history report of a card.
    Export {
        /// Card ID or name (case-insensitive).
        card: String,
        /// Write the report to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Manage fund categories.
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Expense rollups by category and by card.
    Expenses,
    /// Income rollups by category and by card.
    Income,
    /// Income and expenses of the last seven days.
    Weekly,
    /// Show the summary figures, updating any that are given.
    Summary(SummaryArgs),
    /// Replace all data with the initial state.
    Reset,
}

/// `cards` subcommands.
#[derive(Debug, Subcommand)]
enum CardCommand {
    /// List all cards.
    List,
    /// Add a card.
    Add(AddCardArgs),
    /// Change card attributes.
    Edit(EditCardArgs),
    /// Delete a card.
    Delete {
        /// Card ID or name (case-insensitive).
        card: String,
        /// Also delete the card's history rows.
        #[arg(long)]
        purge_history: bool,
    },
}

/// Card kind accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// Debit card.
    Debit,
    /// Credit card.
    Credit,
}

impl From<KindArg> for CardKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Debit => Self::Debit,
            KindArg::Credit => Self::Credit,
        }
    }
}

/// Arguments for `cards add`.
#[derive(Debug, Args)]
struct AddCardArgs {
    /// Display name.
    name: String,
    /// Card kind.
    #[arg(long, value_enum, default_value_t = KindArg::Debit)]
    kind: KindArg,
    /// Starting balance of a debit card.
    #[arg(long)]
    balance: Option<f64>,
    /// Credit limit of a credit card (default 5000).
    #[arg(long)]
    credit_limit: Option<f64>,
    /// Payment date of a credit card, as free text.
    #[arg(long)]
    payment_date: Option<String>,
    /// Expiry date, e.g. `09/26`.
    #[arg(long)]
    expiry: Option<String>,
}

/// Arguments for `cards edit`.
#[derive(Debug, Args)]
struct EditCardArgs {
    /// Card ID or name (case-insensitive).
    card: String,
    /// New display name.
    #[arg(long)]
    name: Option<String>,
    /// New kind.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
    /// New debit balance.
    #[arg(long)]
    balance: Option<f64>,
    /// New credit limit.
    #[arg(long)]
    credit_limit: Option<f64>,
    /// New credit spending.
    #[arg(long)]
    spending: Option<f64>,
    /// New payment date.
    #[arg(long)]
    payment_date: Option<String>,
    /// New expiry date.
    #[arg(long)]
    expiry: Option<String>,
}

/// Fund operation accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OperationArg {
    /// Add money.
    Add,
    /// Subtract money.
    Subtract,
}

impl From<OperationArg> for Operation {
    fn from(operation: OperationArg) -> Self {
        match operation {
            OperationArg::Add => Self::Add,
            OperationArg::Subtract => Self::Subtract,
        }
    }
}

/// Arguments for `fund`.
#[derive(Debug, Args)]
struct FundArgs {
    /// Add or subtract.
    #[arg(value_enum)]
    operation: OperationArg,
    /// Card ID or name (case-insensitive).
    card: String,
    /// Positive amount.
    amount: String,
    /// Description (default: "Added $X to <card>").
    #[arg(long, short)]
    description: Option<String>,
    /// Category label.
    #[arg(long, short)]
    category: Option<String>,
}

/// Category list accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListArg {
    /// Categories offered for add operations.
    Add,
    /// Categories offered for subtract operations.
    Subtract,
}

impl From<ListArg> for CategoryList {
    fn from(list: ListArg) -> Self {
        match list {
            ListArg::Add => Self::AddFund,
            ListArg::Subtract => Self::SubtractFund,
        }
    }
}

/// `categories` subcommands.
#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// List both category lists.
    List,
    /// Add a category.
    Add {
        /// Target list.
        #[arg(value_enum)]
        list: ListArg,
        /// Category name.
        name: String,
    },
    /// Rename a category. Past history keeps the old label.
    Rename {
        /// Target list.
        #[arg(value_enum)]
        list: ListArg,
        /// Current name.
        old: String,
        /// New name.
        new: String,
    },
    /// Delete a category.
    Delete {
        /// Target list.
        #[arg(value_enum)]
        list: ListArg,
        /// Category name.
        name: String,
    },
}

/// Arguments for `summary`.
#[derive(Debug, Args)]
struct SummaryArgs {
    /// New total income.
    #[arg(long)]
    total_income: Option<f64>,
    /// New total expenses.
    #[arg(long)]
    total_expenses: Option<f64>,
    /// New balance.
    #[arg(long)]
    balance: Option<f64>,
    /// New monthly budget.
    #[arg(long)]
    monthly_budget: Option<f64>,
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from));
    let storage = match create_storage(data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize storage: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut store = Store::open(storage);
    let code = execute(&mut store, cli.command, Local::now().naive_local())?;
    if let Err(err) = store.storage().flush() {
        writeln!(
            io::stderr().lock(),
            "{} failed to save changes: {err}",
            "error:".red().bold()
        )?;
        return Ok(ExitCode::FAILURE);
    }
    Ok(code)
}

/// Creates the storage backend, using `data_dir` if provided or the
/// default XDG data directory otherwise.
fn create_storage(
    data_dir: Option<PathBuf>,
) -> ewallet_rs::error::Result<QueuedStorage<FileStorage>> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    QueuedStorage::new(FileStorage::new(dir)?)
}

/// Dispatches to the appropriate subcommand handler.
fn execute<S: DocumentStorage>(
    store: &mut Store<S>,
    command: Command,
    now: NaiveDateTime,
) -> io::Result<ExitCode> {
    match command {
        Command::Cards(CardCommand::List) => {
            print_cards_table(&store.document().cards)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Cards(CardCommand::Add(args)) => cmd_add_card(store, args),
        Command::Cards(CardCommand::Edit(args)) => cmd_edit_card(store, args),
        Command::Cards(CardCommand::Delete {
            card,
            purge_history,
        }) => cmd_delete_card(store, &card, purge_history),
        Command::Fund(args) => cmd_fund(store, args, now),
        Command::History { card } => cmd_history(store.document(), card.as_deref()),
        Command::Purge { card } => {
            let Some(id) = resolve_card(store.document(), &card)?.map(|found| found.id.clone())
            else {
                return Ok(ExitCode::FAILURE);
            };
            apply(store, Action::PurgeCardHistory(id), "history purged")
        }
        Command::Export { card, output } => {
            cmd_export(store.document(), &card, output, now.date())
        }
        Command::Categories(action) => cmd_categories(store, action),
        Command::Expenses => {
            print_rollups(store.document(), Operation::Subtract)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Income => {
            print_rollups(store.document(), Operation::Add)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Weekly => {
            print_weekly(&weekly_report(store.document(), now.date()))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Summary(args) => cmd_summary(store, &args),
        Command::Reset => apply(
            store,
            Action::LoadData(Box::default()),
            "wallet reset to its initial state",
        ),
    }
}

/// Dispatches a store command, reporting success or the rejection.
fn apply<S: DocumentStorage>(
    store: &mut Store<S>,
    command: Action,
    done: &str,
) -> io::Result<ExitCode> {
    match store.dispatch(command) {
        Ok(()) => {
            writeln!(io::stdout().lock(), "{} {done}", "ok:".green().bold())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Finds a card by exact ID, then by case-insensitive name, printing an
/// error when there is no match.
fn resolve_card<'doc>(document: &'doc Document, selector: &str) -> io::Result<Option<&'doc Card>> {
    let found = document
        .cards
        .iter()
        .find(|card| card.id.as_inner() == selector)
        .or_else(|| document.find_card_by_name(selector));
    if found.is_none() {
        writeln!(
            io::stderr().lock(),
            "{} card not found: {selector}",
            "error:".red().bold()
        )?;
    }
    Ok(found)
}

/// Executes `cards add`.
fn cmd_add_card<S: DocumentStorage>(store: &mut Store<S>, args: AddCardArgs) -> io::Result<ExitCode> {
    let base = match args.kind {
        KindArg::Debit => Card::debit(args.name, args.balance.unwrap_or(0.0)),
        KindArg::Credit => Card::credit(
            args.name,
            args.credit_limit.unwrap_or(0.0),
            args.payment_date,
        ),
    };
    let card = match args.expiry {
        Some(expiry) => base.with_expiry_date(expiry),
        None => base,
    };
    let message = format!("card added ({})", card.id);
    apply(store, Action::AddCard(card), &message)
}

/// Executes `cards edit`.
fn cmd_edit_card<S: DocumentStorage>(
    store: &mut Store<S>,
    args: EditCardArgs,
) -> io::Result<ExitCode> {
    let Some(id) = resolve_card(store.document(), &args.card)?.map(|card| card.id.clone()) else {
        return Ok(ExitCode::FAILURE);
    };
    let patch = CardPatch {
        name: args.name,
        expiry_date: args.expiry,
        kind: args.kind.map(CardKind::from),
        balance: args.balance,
        credit_limit: args.credit_limit,
        current_spending: args.spending,
        payment_date: args.payment_date,
    };
    apply(store, Action::UpdateCard { id, patch }, "card updated")
}

/// Executes `cards delete`.
fn cmd_delete_card<S: DocumentStorage>(
    store: &mut Store<S>,
    selector: &str,
    purge_history: bool,
) -> io::Result<ExitCode> {
    let Some(id) = resolve_card(store.document(), selector)?.map(|card| card.id.clone()) else {
        return Ok(ExitCode::FAILURE);
    };
    if purge_history {
        let code = apply(
            store,
            Action::PurgeCardHistory(id.clone()),
            "history purged",
        )?;
        if code != ExitCode::SUCCESS {
            return Ok(code);
        }
    }
    apply(store, Action::DeleteCard(id), "card deleted")
}

/// Executes `fund`: validates the amount, then applies the operation.
fn cmd_fund<S: DocumentStorage>(
    store: &mut Store<S>,
    args: FundArgs,
    now: NaiveDateTime,
) -> io::Result<ExitCode> {
    let Some(id) = resolve_card(store.document(), &args.card)?.map(|card| card.id.clone()) else {
        return Ok(ExitCode::FAILURE);
    };
    let amount = match parse_amount(&args.amount) {
        Ok(amount) => amount,
        Err(err) => {
            writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())?;
            return Ok(ExitCode::FAILURE);
        }
    };
    let mut request = FundRequest::new(id.clone(), args.operation.into(), amount, now);
    if let Some(description) = args.description {
        request = request.description(description);
    }
    if let Some(category) = args.category {
        request = request.category(category);
    }
    if let Err(err) = store.dispatch(Action::ApplyFundOperation(request)) {
        writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())?;
        return Ok(ExitCode::FAILURE);
    }

    let mut out = io::stdout().lock();
    if let Some(tx) = store.document().transaction_history.first() {
        writeln!(out, "{} {}", "ok:".green().bold(), tx.description)?;
    }
    if let Some(card) = store.document().card(&id) {
        let label = match card.kind() {
            CardKind::Debit => "balance",
            CardKind::Credit => "spending",
        };
        writeln!(
            out,
            "  {} {}",
            format_args!("{label}:").dimmed(),
            format_currency(card.current_amount())
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `history`.
fn cmd_history(document: &Document, selector: Option<&str>) -> io::Result<ExitCode> {
    let rows: Vec<&Transaction> = match selector {
        Some(selector) => {
            let Some(card) = resolve_card(document, selector)? else {
                return Ok(ExitCode::FAILURE);
            };
            reports::card_transactions(document, &card.id)
        }
        None => document.transaction_history.iter().collect(),
    };
    print_history_table(&rows)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `export`.
fn cmd_export(
    document: &Document,
    selector: &str,
    output: Option<PathBuf>,
    today: NaiveDate,
) -> io::Result<ExitCode> {
    let Some(card) = resolve_card(document, selector)? else {
        return Ok(ExitCode::FAILURE);
    };
    let report = match export_card_history(document, &card.id, today) {
        Ok(report) => report,
        Err(err) => {
            writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())?;
            return Ok(ExitCode::FAILURE);
        }
    };
    match output {
        Some(path) => {
            if let Err(err) = fs::write(&path, format!("{report}\n")) {
                writeln!(
                    io::stderr().lock(),
                    "{} failed to write {}: {err}",
                    "error:".red().bold(),
                    path.display()
                )?;
                return Ok(ExitCode::FAILURE);
            }
            writeln!(
                io::stdout().lock(),
                "{} report written to {}",
                "ok:".green().bold(),
                path.display()
            )?;
        }
        None => writeln!(io::stdout().lock(), "{report}")?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `categories` subcommands.
fn cmd_categories<S: DocumentStorage>(
    store: &mut Store<S>,
    action: CategoryCommand,
) -> io::Result<ExitCode> {
    match action {
        CategoryCommand::List => {
            print_categories(store.document())?;
            Ok(ExitCode::SUCCESS)
        }
        CategoryCommand::Add { list, name } => apply(
            store,
            Action::AddCategory {
                list: list.into(),
                name,
            },
            "category added",
        ),
        CategoryCommand::Rename { list, old, new } => apply(
            store,
            Action::UpdateCategory {
                list: list.into(),
                old_name: old,
                new_name: new,
            },
            "category renamed",
        ),
        CategoryCommand::Delete { list, name } => apply(
            store,
            Action::DeleteCategory {
                list: list.into(),
                name,
            },
            "category deleted",
        ),
    }
}

/// Executes `summary`, updating first if any figure was given.
fn cmd_summary<S: DocumentStorage>(
    store: &mut Store<S>,
    args: &SummaryArgs,
) -> io::Result<ExitCode> {
    let patch = SummaryPatch {
        total_income: args.total_income,
        total_expenses: args.total_expenses,
        balance: args.balance,
        monthly_budget: args.monthly_budget,
    };
    if patch != SummaryPatch::default()
        && let Err(err) = store.dispatch(Action::UpdateSummary(patch))
    {
        writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())?;
        return Ok(ExitCode::FAILURE);
    }
    print_summary(store.document())?;
    Ok(ExitCode::SUCCESS)
}

// ── Output formatting ────────────────────────────────────────────────

/// Builds a table with the shared preset and a cyan header row.
fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Prints cards in a table.
fn print_cards_table(cards: &[Card]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if cards.is_empty() {
        writeln!(out, "{}", "No cards found.".dimmed())?;
        return Ok(());
    }

    let mut table = new_table(&["ID", "Name", "Type", "Expiry", "Balance / Spending", "Limit"]);
    for card in cards {
        let limit = match card.details {
            CardDetails::Debit { .. } => "\u{2014}".to_owned(),
            CardDetails::Credit { credit_limit, .. } => format_currency(credit_limit),
        };
        _ = table.add_row(vec![
            Cell::new(card.id.as_inner()).fg(Color::DarkGrey),
            Cell::new(&card.name),
            Cell::new(card.kind().label()),
            Cell::new(&card.expiry_date),
            Cell::new(format_currency(card.current_amount())),
            Cell::new(limit),
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Cards".green().bold(),
        format_args!("({})", cards.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints history rows in a table.
fn print_history_table(rows: &[&Transaction]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if rows.is_empty() {
        writeln!(out, "{}", "No transactions found.".dimmed())?;
        return Ok(());
    }

    let mut table = new_table(&["Date", "Card", "Description", "Category", "Amount"]);
    for tx in rows {
        let amount = format!("{}{}", tx.operation.sign(), format_currency(tx.amount));
        let amount_cell = match tx.operation {
            Operation::Add => Cell::new(amount).fg(Color::Green),
            Operation::Subtract => Cell::new(amount).fg(Color::Red),
        };
        _ = table.add_row(vec![
            Cell::new(&tx.date),
            Cell::new(tx.card_name.as_deref().unwrap_or("\u{2014}")),
            Cell::new(&tx.description),
            Cell::new(tx.category_label().unwrap_or(reports::UNCATEGORIZED)),
            amount_cell,
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Transactions".green().bold(),
        format_args!("({})", rows.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints category and card rollups for one operation.
fn print_rollups(document: &Document, operation: Operation) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let title = match operation {
        Operation::Add => "Income",
        Operation::Subtract => "Expenses",
    };
    writeln!(
        out,
        "{} {}",
        title.green().bold(),
        format_currency(reports::operation_total(document, operation)).bold()
    )?;

    let categories: Vec<CategoryTotal> = category_rollup(document, operation);
    if categories.is_empty() {
        writeln!(out, "{}", "No transactions found.".dimmed())?;
        return Ok(());
    }
    let mut by_category = new_table(&["Category", "Count", "Total"]);
    for group in &categories {
        _ = by_category.add_row(vec![
            Cell::new(&group.category),
            Cell::new(group.count),
            Cell::new(format_currency(group.total)),
        ]);
    }
    writeln!(out)?;
    writeln!(out, "{by_category}")?;

    let cards: Vec<CardTotal> = card_rollup(document, operation);
    let mut by_card = new_table(&["Card", "Count", "Total"]);
    for group in &cards {
        _ = by_card.add_row(vec![
            Cell::new(&group.card_name),
            Cell::new(group.count),
            Cell::new(format_currency(group.total)),
        ]);
    }
    writeln!(out)?;
    writeln!(out, "{by_card}")?;
    Ok(())
}

/// Prints the seven-day series.
fn print_weekly(report: &WeeklyReport) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let mut table = new_table(&["Day", "Date", "Income", "Expenses"]);
    for day in &report.days {
        _ = table.add_row(vec![
            Cell::new(&day.label),
            Cell::new(locale_date(day.date)),
            Cell::new(format_currency(day.income)).fg(Color::Green),
            Cell::new(format_currency(day.expenses)).fg(Color::Red),
        ]);
    }
    writeln!(out, "{}", "Last 7 days".green().bold())?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{} {}  {} {}  {} {}",
        "income:".dimmed(),
        format_currency(report.total_income),
        "expenses:".dimmed(),
        format_currency(report.total_expenses),
        "net:".dimmed(),
        format_currency(report.net).bold()
    )?;
    Ok(())
}

/// Prints both category lists.
fn print_categories(document: &Document) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for (title, list) in [
        ("Add fund", CategoryList::AddFund),
        ("Subtract fund", CategoryList::SubtractFund),
    ] {
        let names = document.categories.list(list);
        writeln!(
            out,
            "{} {}",
            title.green().bold(),
            format_args!("({})", names.len()).dimmed()
        )?;
        for name in names {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(())
}

/// Prints the summary figures.
fn print_summary(document: &Document) -> io::Result<()> {
    let summary = &document.summary;
    let mut table = new_table(&["Figure", "Amount"]);
    for (name, value) in [
        ("Total income", summary.total_income),
        ("Total expenses", summary.total_expenses),
        ("Balance", summary.balance),
        ("Monthly budget", summary.monthly_budget),
    ] {
        _ = table.add_row(vec![Cell::new(name), Cell::new(format_currency(value))]);
    }
    writeln!(io::stdout().lock(), "{table}")?;
    Ok(())
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // If stderr itself failed there is nothing left to report to.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
