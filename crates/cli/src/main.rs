// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod catalog;

use cafe_order::{
    Command as SessionCommand, OrderBook, SchedulingSession, apply_all, checkout, update_order,
};
use cafe_order_domain::{
    CONVENIENCE_FEE, CalendarMonth, Cart, Clock, FixedClock, LineRequest, MenuItem, Order,
    OrderDetails, RepeatMode, ScheduledOccurrence, SystemClock, TimeOfDay, WEEKDAY_HEADINGS,
    ZonedClock, build_cart,
};
use cafe_order_notice::{Notice, NoticeLevel};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};
use tracing::{debug, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(&args.verbosity);

    args.run()
}

/// Logs go to stderr so stdout carries only the JSON output.
fn init_tracing(verbosity: &Verbosity<InfoLevel>) {
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(verbosity.log_level_filter().as_trace().into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Cafe Order - schedule, price and reschedule cafeteria orders
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pin today's date (YYYY-MM-DD) instead of reading the clock
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<Date>,

    /// IANA time zone that decides what "today" is; defaults to the local offset
    #[arg(long, global = true, value_parser = parse_timezone)]
    timezone: Option<Tz>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let clock: Box<dyn Clock> = self.clock();
        debug!(today = %clock.today(), "Clock ready");
        self.command.run(clock.as_ref())
    }

    fn clock(&self) -> Box<dyn Clock> {
        match (self.today, self.timezone) {
            (Some(today), _) => Box::new(FixedClock::at_midnight(today)),
            (None, Some(tz)) => Box::new(ZonedClock::new(tz)),
            (None, None) => Box::new(SystemClock),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the demo menu
    Menu,

    /// Print a month grid
    #[command(visible_alias = "cal")]
    Calendar {
        /// Year to show; defaults to the current year
        #[arg(long)]
        year: Option<i32>,

        /// Month to show (1-12); defaults to the current month
        #[arg(long)]
        month: Option<u8>,
    },

    /// Pick dates for the cart and price the scheduled checkout
    Schedule {
        /// Menu item to order, repeatable
        #[arg(long = "item", value_name = "ID[:QTY]", required = true)]
        items: Vec<LineRequest>,

        /// Date to order for, repeatable
        #[arg(long = "date", value_name = "YYYY-MM-DD", value_parser = parse_date, required = true)]
        dates: Vec<Date>,

        /// How the picked dates repeat
        #[arg(long, default_value = "none")]
        repeat: RepeatMode,

        /// Time of day for every order
        #[arg(long, value_name = "hh:mm AM|PM", default_value = "08:00 AM")]
        time: TimeOfDay,

        /// Also place the scheduled orders
        #[arg(long)]
        place: bool,
    },

    /// Move an existing scheduled order to another date
    Reschedule {
        /// When the existing order is due
        #[arg(long, value_name = "YYYY-MM-DDTHH:MM", value_parser = parse_date_time)]
        order_date: PrimitiveDateTime,

        /// New date for the order
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Date,

        /// New time of day; keeps the order's time when omitted
        #[arg(long, value_name = "hh:mm AM|PM")]
        time: Option<TimeOfDay>,

        /// Items on the existing order; defaults to one of item 1
        #[arg(long = "item", value_name = "ID[:QTY]")]
        items: Vec<LineRequest>,
    },
}

impl Command {
    fn run(self, clock: &dyn Clock) -> Result<()> {
        match self {
            Self::Menu => print_json(&catalog::menu()),
            Self::Calendar { year, month } => {
                let today: Date = clock.today();
                let shown: CalendarMonth = CalendarMonth::new(
                    year.unwrap_or_else(|| today.year()),
                    month.unwrap_or_else(|| u8::from(today.month())),
                )
                .wrap_err("choosing the month to show")?;
                print!("{}", render_calendar(shown));
                Ok(())
            }
            Self::Schedule {
                items,
                dates,
                repeat,
                time,
                place,
            } => print_json(&schedule(clock, &items, &dates, repeat, time, place)?),
            Self::Reschedule {
                order_date,
                date,
                time,
                items,
            } => print_json(&reschedule(clock, order_date, date, time, &items)?),
        }
    }
}

/// Output of `schedule`.
#[derive(Debug, Serialize)]
struct ScheduleReport {
    /// Selection banner text.
    summary: String,
    repeat: RepeatMode,
    checkout: OrderDetails,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    orders: Vec<Order>,
}

/// Output of `reschedule`.
#[derive(Debug, Serialize)]
struct RescheduleReport {
    before: Order,
    after: Order,
}

fn schedule(
    clock: &dyn Clock,
    items: &[LineRequest],
    dates: &[Date],
    repeat: RepeatMode,
    time: TimeOfDay,
    place: bool,
) -> Result<ScheduleReport> {
    let menu: Vec<MenuItem> = catalog::menu();
    let cart: Cart = build_cart(&menu, items).wrap_err("building the cart")?;
    let details: OrderDetails = OrderDetails::from_cart(&cart, CONVENIENCE_FEE);

    // Toggling is a flip, so each date is clicked once.
    let mut picked: Vec<Date> = dates.to_vec();
    picked.sort_unstable();
    picked.dedup();

    let today: Date = clock.today();
    let mut commands: Vec<SessionCommand> = Vec::with_capacity(picked.len() + 2);
    for date in picked {
        if date < today {
            warn!(%date, %today, "Skipping date in the past");
        }
        commands.push(SessionCommand::ToggleDate { date });
    }
    commands.push(SessionCommand::SetTime { time });
    commands.push(SessionCommand::SetRepeat { mode: repeat });

    let (session, notices) = apply_all(&SchedulingSession::create(clock), commands, clock)
        .wrap_err("scheduling the picked dates")?;
    report_notices(&notices);

    let priced: OrderDetails = checkout(&session, &details).wrap_err("checking out")?;
    info!(
        dates = %session.summary(),
        orders = priced.order_count(),
        total = %priced.total,
        "Checkout ready"
    );

    let orders: Vec<Order> = if place {
        let mut book: OrderBook = OrderBook::new();
        book.place_scheduled(&priced, cafe_of(&cart), clock.now())
            .wrap_err("placing the scheduled orders")?
    } else {
        Vec::new()
    };

    Ok(ScheduleReport {
        summary: session.summary(),
        repeat: session.repeat(),
        checkout: priced,
        orders,
    })
}

fn reschedule(
    clock: &dyn Clock,
    order_date: PrimitiveDateTime,
    date: Date,
    time: Option<TimeOfDay>,
    items: &[LineRequest],
) -> Result<RescheduleReport> {
    let requests: Vec<LineRequest> = if items.is_empty() {
        vec![LineRequest {
            item_id: 1,
            quantity: 1,
        }]
    } else {
        items.to_vec()
    };
    let menu: Vec<MenuItem> = catalog::menu();
    let cart: Cart = build_cart(&menu, &requests).wrap_err("building the order items")?;

    let existing: OrderDetails = OrderDetails {
        schedules: Some(vec![ScheduledOccurrence::new(
            order_date.date(),
            TimeOfDay::from_time(order_date.time()),
        )]),
        ..OrderDetails::from_cart(&cart, CONVENIENCE_FEE)
    };
    let mut book: OrderBook = OrderBook::new();
    let before: Order = book
        .place_scheduled(&existing, cafe_of(&cart), clock.now())
        .wrap_err("recreating the existing order")?
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("no order was recreated"))?;

    if date < clock.today() {
        warn!(%date, "New date is in the past and will be ignored");
    }
    let mut commands: Vec<SessionCommand> = vec![SessionCommand::ToggleDate { date }];
    commands.extend(time.map(|time| SessionCommand::SetTime { time }));

    let (session, notices) = apply_all(&SchedulingSession::edit(before.clone()), commands, clock)
        .wrap_err("picking the new date")?;
    report_notices(&notices);

    let after: Order = update_order(&session).wrap_err("updating the order")?;
    book.replace(after.clone())
        .wrap_err("storing the updated order")?;

    Ok(RescheduleReport { before, after })
}

fn cafe_of(cart: &Cart) -> &str {
    cart.lines()
        .first()
        .map_or("", |line| line.item.cafe.as_str())
}

fn report_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Info => info!("{notice}"),
            NoticeLevel::Warning => warn!("{notice}"),
        }
    }
}

fn render_calendar(month: CalendarMonth) -> String {
    let mut out: String = format!("{month}\n{}\n", WEEKDAY_HEADINGS.join(" "));
    for week in month.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| cell.day().map_or_else(|| String::from("   "), |day| format!("{day:>3}")))
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json: String = serde_json::to_string_pretty(value).wrap_err("serializing the output")?;
    println!("{json}");
    Ok(())
}

fn parse_date(input: &str) -> Result<Date, String> {
    Date::parse(input, DATE_FORMAT).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn parse_date_time(input: &str) -> Result<PrimitiveDateTime, String> {
    PrimitiveDateTime::parse(input, DATE_TIME_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DDTHH:MM: {err}"))
}

fn parse_timezone(input: &str) -> Result<Tz, String> {
    input
        .parse::<Tz>()
        .map_err(|err| format!("unknown time zone '{input}': {err}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use rust_decimal::Decimal;
    use time::macros::{date, datetime};

    fn test_clock() -> FixedClock {
        FixedClock::at_midnight(date!(2024 - 06 - 20))
    }

    #[test]
    fn test_parse_schedule_arguments() {
        let args: Args = Args::try_parse_from([
            "cafe-order",
            "--today",
            "2024-06-20",
            "schedule",
            "--item",
            "1:2",
            "--item",
            "3",
            "--date",
            "2024-06-25",
            "--repeat",
            "weekly",
            "--time",
            "12:30 PM",
        ])
        .unwrap();

        assert_eq!(args.today, Some(date!(2024 - 06 - 20)));
        let Command::Schedule {
            items,
            dates,
            repeat,
            time,
            place,
        } = args.command
        else {
            panic!("expected the schedule subcommand");
        };
        assert_eq!(
            items,
            vec![
                LineRequest {
                    item_id: 1,
                    quantity: 2
                },
                LineRequest {
                    item_id: 3,
                    quantity: 1
                },
            ]
        );
        assert_eq!(dates, vec![date!(2024 - 06 - 25)]);
        assert_eq!(repeat, RepeatMode::Weekly);
        assert_eq!(time.to_string(), "12:30 PM");
        assert!(!place);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let result = Args::try_parse_from([
            "cafe-order",
            "schedule",
            "--item",
            "1",
            "--date",
            "2024-06-25",
            "--time",
            "2:15 pm",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Asia/Kolkata"), Ok(Tz::Asia__Kolkata));
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_render_calendar_pads_leading_blanks() {
        let rendered: String = render_calendar(CalendarMonth::new(2024, 6).unwrap());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "June 2024");
        assert_eq!(lines[1], "SUN MON TUE WED THU FRI SAT");
        // 1 June 2024 is a Saturday.
        assert_eq!(lines[2], format!("{}  1", " ".repeat(24)));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_schedule_weekly_and_place() {
        let report: ScheduleReport = schedule(
            &test_clock(),
            &[LineRequest {
                item_id: 1,
                quantity: 1,
            }],
            &[date!(2024 - 06 - 25), date!(2024 - 06 - 25)],
            RepeatMode::Weekly,
            TimeOfDay::default(),
            true,
        )
        .unwrap();

        assert_eq!(report.summary, "25 Jun, 2 Jul, 9 Jul, 16 Jul");
        assert_eq!(report.checkout.total, Decimal::new(820, 0));
        assert_eq!(report.orders.len(), 4);
        assert_eq!(report.orders[0].cafe, "Cozy Corner");
        assert_eq!(report.orders[0].date, datetime!(2024-06-25 8:00));
    }

    #[test]
    fn test_schedule_with_only_past_dates_fails() {
        let result: Result<ScheduleReport> = schedule(
            &test_clock(),
            &[LineRequest {
                item_id: 3,
                quantity: 1,
            }],
            &[date!(2024 - 06 - 01)],
            RepeatMode::None,
            TimeOfDay::default(),
            false,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_reschedule_moves_order() {
        let report: RescheduleReport = reschedule(
            &test_clock(),
            datetime!(2024-06-20 12:30),
            date!(2024 - 06 - 27),
            Some("02:15 PM".parse().unwrap()),
            &[],
        )
        .unwrap();

        assert_eq!(report.before.date, datetime!(2024-06-20 12:30));
        assert_eq!(report.after.date, datetime!(2024-06-27 14:15));
        assert_eq!(report.after.id, report.before.id);
        assert_eq!(report.after.total, Decimal::new(205, 0));
    }
}
