use chrono::Datelike;
use timetable_builder::{
    Direction, EditorConfig, PeriodCount, ScheduleStore, Weekday, clamp_grade, export_to_csv,
    export_to_json, init_logging,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn render_day_as_text_table(store: &ScheduleStore) -> String {
    let Some(cursor) = store.cursor() else {
        return "(no classes yet - use `classes <list>` first)\n".to_string();
    };
    let slots = store.current_day_slots().unwrap_or_default();

    let title = format!(
        "{} · {}요일 ({}교시)",
        cursor.section,
        cursor.weekday.korean_label(),
        store.period_count()
    );

    let headers = ["period", "subject"];
    let rows: Vec<[String; 2]> = slots
        .iter()
        .enumerate()
        .map(|(idx, subject)| [(idx + 1).to_string(), subject.clone()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, cells: &[&str]| {
        out.push('|');
        for (ci, cell) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.chars().count());
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&title);
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &headers);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, &[row[0].as_str(), row[1].as_str()]);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the current class and weekday\n  status                             Show grade, classes and period count\n  grade <1|2|3>                      Set the grade (bare class numbers use it)\n  classes <list...>                  Set classes, e.g. 1,2,3 or 1-1,1-2\n  periods <n>                        Set periods per day (1-12, default 7)\n  dims <grade> <periods> <list...>   Set grade, periods and classes at once\n  day <mon|tue|wed|thu|fri|today>    Select weekday\n  next | prev                        Browse to the next/previous class\n  set <period> <subject...>          Set subject for period (1-based)\n  clear                              Blank the current class and weekday\n  export [json|csv] [path]           Write the timetable (default json)\n  quit|exit                          Exit"
    );
}

fn print_status(store: &ScheduleStore) {
    let sections = store
        .sections()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Grade              : {}", store.grade());
    println!("Classes            : {}", sections);
    println!("Periods            : {}", store.period_count());
    println!(
        "Current            : {}",
        store
            .current_section()
            .map(|id| format!("{} {}", id, store.weekday()))
            .unwrap_or_else(|| "—".to_string())
    );
}

fn rest_of_line<'a>(input: &'a str, cmd: &str) -> &'a str {
    input[cmd.len()..].trim()
}

fn confirm(stdin: &io::Stdin, prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn main() {
    let config = EditorConfig::from_env();
    if let Err(err) = init_logging(&config.log_level) {
        eprintln!("logging disabled: {err}");
    }

    let mut store = ScheduleStore::new();
    store.set_dimensions(config.default_grade, "", config.default_periods.get() as i64);

    println!("Timetable Builder (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print!("{}", render_day_as_text_table(&store)),
            "status" => print_status(&store),
            "grade" => match parts.next().map(str::parse::<i64>) {
                Some(Ok(grade)) => {
                    store.set_grade(clamp_grade(grade));
                    println!("Grade set to {}.", store.grade());
                    print!("{}", render_day_as_text_table(&store));
                }
                Some(Err(_)) => println!("Invalid grade"),
                None => println!("Usage: grade <1|2|3>"),
            },
            "classes" => {
                store.set_section_list(rest_of_line(input, cmd));
                println!("{} class(es) selected.", store.sections().len());
                print!("{}", render_day_as_text_table(&store));
            }
            "periods" => match parts.next() {
                Some(text) => {
                    store.set_period_count(PeriodCount::parse(text).get() as i64);
                    println!("Periods set to {}.", store.period_count());
                    print!("{}", render_day_as_text_table(&store));
                }
                None => println!("Usage: periods <n>"),
            },
            "dims" => {
                let grade_s = parts.next();
                let periods_s = parts.next();
                match (grade_s, periods_s) {
                    (Some(grade_s), Some(periods_s)) => {
                        let grade = match grade_s.parse::<i64>() {
                            Ok(v) => clamp_grade(v),
                            Err(_) => {
                                println!("Invalid grade");
                                continue;
                            }
                        };
                        let periods = PeriodCount::parse(periods_s);
                        let list = parts.collect::<Vec<_>>().join(" ");
                        store.set_dimensions(grade, &list, periods.get() as i64);
                        print_status(&store);
                        print!("{}", render_day_as_text_table(&store));
                    }
                    _ => println!("Usage: dims <grade> <periods> <list...>"),
                }
            }
            "day" => match parts.next() {
                Some("today") => {
                    let today = chrono::Local::now().weekday();
                    match Weekday::try_from(today) {
                        Ok(day) => {
                            store.select_weekday(day);
                            print!("{}", render_day_as_text_table(&store));
                        }
                        Err(_) => println!("No school on {today}; weekday unchanged."),
                    }
                }
                Some(code) => {
                    if store.select_weekday_code(code) {
                        print!("{}", render_day_as_text_table(&store));
                    } else {
                        println!("Unknown weekday '{code}' (mon|tue|wed|thu|fri)");
                    }
                }
                None => println!("Usage: day <mon|tue|wed|thu|fri|today>"),
            },
            "next" | "prev" => {
                let direction = if cmd == "next" {
                    Direction::Next
                } else {
                    Direction::Prev
                };
                if store.step_section(direction) {
                    print!("{}", render_day_as_text_table(&store));
                } else {
                    println!("No classes to browse.");
                }
            }
            "set" => {
                let Some(period_s) = parts.next() else {
                    println!("Usage: set <period> <subject...>");
                    continue;
                };
                let period: usize = match period_s.parse() {
                    Ok(v) => v,
                    Err(_) => {
                        println!("Invalid period");
                        continue;
                    }
                };
                let subject = parts.collect::<Vec<_>>().join(" ");
                let applied = period
                    .checked_sub(1)
                    .is_some_and(|idx| store.set_slot_value(idx, &subject));
                if applied {
                    print!("{}", render_day_as_text_table(&store));
                } else {
                    println!(
                        "Nothing changed (period must be 1-{} and a class selected).",
                        store.period_count()
                    );
                }
            }
            "clear" => {
                let Some(cursor) = store.cursor() else {
                    println!("No class selected.");
                    continue;
                };
                let prompt = format!(
                    "Clear {} · {}요일?",
                    cursor.section,
                    cursor.weekday.korean_label()
                );
                if confirm(&stdin, &prompt) {
                    store.clear_current_day();
                    println!("Cleared {} {}.", cursor.section, cursor.weekday);
                    print!("{}", render_day_as_text_table(&store));
                } else {
                    println!("Clear cancelled.");
                }
            }
            "export" => {
                let format = parts.next().unwrap_or("json");
                let default_path = if format == "csv" {
                    config.export_path.with_extension("csv")
                } else {
                    config.export_path.clone()
                };
                let path = parts.next().map(PathBuf::from).unwrap_or(default_path);
                let result = match format {
                    "json" => export_to_json(&store, &path),
                    "csv" => export_to_csv(&store, &path),
                    other => {
                        println!("Unknown export format '{other}' (json|csv)");
                        continue;
                    }
                };
                match result {
                    Ok(document) => println!(
                        "Exported {} class(es) to {}",
                        document.len(),
                        path.display()
                    ),
                    Err(e) => println!("Export failed: {}", e),
                }
            }
            _ => println!("Unknown command '{cmd}'. Type 'help'."),
        }
    }
}
