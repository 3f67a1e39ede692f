use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::domain::entities::{HolidaySet, WorkingMoment};

// Fixed schedule: 08:00-12:00 and 13:00-17:00, Monday through Friday.
fn work_open() -> NaiveTime {
    hm(8, 0)
}

fn lunch_start() -> NaiveTime {
    hm(12, 0)
}

fn lunch_end() -> NaiveTime {
    hm(13, 0)
}

fn work_close() -> NaiveTime {
    hm(17, 0)
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("schedule times are valid wall-clock times")
}

/// True unless the date falls on a weekend or is in the holiday set.
pub fn is_working_day(moment: &WorkingMoment, holidays: &HolidaySet) -> bool {
    is_working_date(moment.date(), holidays)
}

fn is_working_date(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// True for times in [08:00,12:00) or [13:00,17:00); 17:00:00 exactly is a
/// valid landing point, not past closing.
pub fn is_working_time(moment: &WorkingMoment) -> bool {
    let t = moment.time();
    (t >= work_open() && t < lunch_start()) || (t >= lunch_end() && t <= work_close())
}

/// Starting-point normalization: moves an out-of-schedule moment backward
/// to the last valid working instant. Never moves forward.
pub fn snap_to_working_moment(moment: WorkingMoment, holidays: &HolidaySet) -> WorkingMoment {
    if !is_working_day(&moment, holidays) {
        return close_of_previous_working_day(moment, holidays);
    }
    let t = moment.time();
    if t >= work_close() {
        return moment.with_time(work_close());
    }
    if t >= lunch_start() && t < lunch_end() {
        return moment.with_time(lunch_start());
    }
    if t < work_open() {
        return close_of_previous_working_day(moment, holidays);
    }
    moment
}

/// Forward correction applied before hour stepping consumes any budget:
/// an out-of-schedule start moves to the next valid working instant.
pub fn roll_to_working_moment(moment: WorkingMoment, holidays: &HolidaySet) -> WorkingMoment {
    let mut current = moment;
    loop {
        if !is_working_day(&current, holidays) || current.time() >= work_close() {
            current = open_of_next_working_day(current, holidays);
            continue;
        }
        let t = current.time();
        if t < work_open() {
            return current.with_time(work_open());
        }
        if t >= lunch_start() && t < lunch_end() {
            return current.with_time(lunch_end());
        }
        return current;
    }
}

/// Steps the calendar date forward until `days` working days have been
/// counted; time-of-day is preserved untouched. Callers snap first and
/// apply hour corrections afterwards.
pub fn add_working_days(moment: WorkingMoment, days: u32, holidays: &HolidaySet) -> WorkingMoment {
    if days == 0 {
        return moment;
    }
    let mut date = moment.date();
    let mut remaining = days;
    while remaining > 0 {
        date = next_day(date);
        if is_working_date(date, holidays) {
            remaining -= 1;
        }
    }
    moment.with_date(date)
}

/// Adds exactly `hours` hours of business time; lunch, nights, weekends
/// and holidays consume no budget. Whole working days are advanced via
/// `add_working_days`, the sub-day remainder by minute-resolution stepping.
pub fn add_working_hours(moment: WorkingMoment, hours: u32, holidays: &HolidaySet) -> WorkingMoment {
    if hours == 0 {
        return moment;
    }
    // Correct an out-of-schedule start before any budget is consumed, the
    // whole-day advance included.
    let moment = roll_to_working_moment(moment, holidays);
    let hours = i64::from(hours);
    // A full business day holds exactly 8 working hours. Positive multiples
    // of 8 borrow one day into the remainder so the budget finishes at
    // 17:00 of the last counted day instead of 08:00 of the next.
    let (whole_days, remainder_minutes) = if hours % 8 == 0 {
        (hours / 8 - 1, 8 * 60)
    } else {
        (hours / 8, (hours % 8) * 60)
    };
    let moment = add_working_days(moment, whole_days as u32, holidays);
    step_working_minutes(moment, remainder_minutes, holidays)
}

/// Consumes `minutes` of business time block by block. The budget is held
/// in integer milliseconds so starts carrying seconds or milliseconds
/// advance without drift.
fn step_working_minutes(
    moment: WorkingMoment,
    minutes: i64,
    holidays: &HolidaySet,
) -> WorkingMoment {
    let mut current = roll_to_working_moment(moment, holidays);
    let mut budget_ms = minutes * 60_000;
    while budget_ms > 0 {
        let room_ms = millis_until_block_end(current.time());
        if room_ms > budget_ms {
            current = current.plus_milliseconds(budget_ms);
            budget_ms = 0;
        } else {
            current = current.plus_milliseconds(room_ms);
            budget_ms -= room_ms;
            if budget_ms > 0 {
                current = roll_to_working_moment(current, holidays);
            }
        }
    }
    // Landing exactly on the lunch boundary is pushed to its end; landing
    // on 17:00 stays terminal for the day.
    if current.time() == lunch_start() {
        current = current.with_time(lunch_end());
    }
    current
}

// Room left in the current working block, assuming an in-block time.
fn millis_until_block_end(time: NaiveTime) -> i64 {
    let end = if time < lunch_start() {
        lunch_start()
    } else {
        work_close()
    };
    (end - time).num_milliseconds()
}

fn close_of_previous_working_day(moment: WorkingMoment, holidays: &HolidaySet) -> WorkingMoment {
    let mut date = previous_day(moment.date());
    while !is_working_date(date, holidays) {
        date = previous_day(date);
    }
    moment.with_date(date).with_time(work_close())
}

fn open_of_next_working_day(moment: WorkingMoment, holidays: &HolidaySet) -> WorkingMoment {
    let mut date = next_day(moment.date());
    while !is_working_date(date, holidays) {
        date = next_day(date);
    }
    moment.with_date(date).with_time(work_open())
}

fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("calendar date has a predecessor")
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("calendar date has a successor")
}
