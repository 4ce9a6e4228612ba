//! Reservation calendar layout
//!
//! One row per room, one column per day of the month. Reservations are
//! placed as bars clipped to the visible month.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Reservation, Room, RoomType};

const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const MONTH_ABBR: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Colours cycled by room type id
pub const ROOM_TYPE_PALETTE: [&str; 8] = [
    "#fb923c", "#ef4444", "#a855f7", "#60a5fa", "#10b981", "#f59e0b", "#ec4899", "#06b6d4",
];

/// Colour for room types that have not been saved
pub const UNASSIGNED_COLOR: &str = "#e5e7eb";

/// Column header for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub date: NaiveDate,
    /// `MON`
    pub day_name: &'static str,
    /// `5 JAN`
    pub label: String,
}

/// Bar position of a reservation in the month grid (1-based columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start_column: u32,
    pub span: u32,
}

/// One room type and its rooms
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRow {
    pub room_type: RoomType,
    pub rooms: Vec<Room>,
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first_day: NaiveDate,
}

impl MonthView {
    /// `month` is 1-based; `None` for an invalid month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month (exclusive end of this one)
    pub fn end_exclusive(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end_exclusive().pred_opt().unwrap_or(self.first_day)
    }

    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_day
            .iter_days()
            .take(self.day_count() as usize)
            .collect()
    }

    pub fn previous(&self) -> Self {
        Self {
            first_day: self
                .first_day
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first_day),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first_day: self.end_exclusive(),
        }
    }

    /// `January 2026`
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0()], self.year())
    }

    pub fn day_headers(&self) -> Vec<DayHeader> {
        self.days()
            .into_iter()
            .map(|date| DayHeader {
                date,
                day_name: DAY_NAMES[date.weekday().num_days_from_sunday() as usize],
                label: format!("{} {}", date.day(), MONTH_ABBR[date.month0() as usize]),
            })
            .collect()
    }

    /// Whether a stay `[check_in, check_out)` touches this month
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in < self.end_exclusive() && check_out > self.first_day
    }

    /// 1-based start column; stays that began earlier start at column 1,
    /// stays that begin after the month are not shown.
    pub fn start_column(&self, check_in: NaiveDate) -> Option<u32> {
        if check_in < self.first_day {
            return Some(1);
        }
        if check_in > self.last_day() {
            return None;
        }
        Some(check_in.day())
    }

    /// Visible length of a stay in days, at least 1
    pub fn span(&self, check_in: NaiveDate, check_out: NaiveDate) -> u32 {
        let visible_start = check_in.max(self.first_day);
        let visible_end = check_out.min(self.end_exclusive());
        let days = (visible_end - visible_start).num_days();
        days.max(1) as u32
    }

    /// Bar for `reservation`, or `None` when it is not visible this month
    pub fn place(&self, reservation: &Reservation) -> Option<Placement> {
        reservation.room.id?;
        let (check_in, check_out) = (reservation.check_in_date, reservation.check_out_date);
        if !self.overlaps(check_in, check_out) {
            return None;
        }
        Some(Placement {
            start_column: self.start_column(check_in)?,
            span: self.span(check_in, check_out),
        })
    }

    /// Reservations that get a bar this month: they touch the month and
    /// their room is saved
    pub fn visible<'a>(&self, reservations: &'a [Reservation]) -> Vec<&'a Reservation> {
        reservations
            .iter()
            .filter(|r| self.place(r).is_some())
            .collect()
    }

    fn month0(&self) -> usize {
        self.first_day.month0() as usize
    }
}

/// Pair each room type with its rooms; types without rooms are dropped
pub fn group_rooms_by_type(room_types: &[RoomType], rooms: &[Room]) -> Vec<CalendarRow> {
    room_types
        .iter()
        .map(|room_type| CalendarRow {
            room_type: room_type.clone(),
            rooms: rooms
                .iter()
                .filter(|room| room_type.id.is_some() && room.room_type.id == room_type.id)
                .cloned()
                .collect(),
        })
        .filter(|row| !row.rooms.is_empty())
        .collect()
}

pub fn reservations_for_room(reservations: &[Reservation], room_id: i64) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| r.room.id == Some(room_id))
        .collect()
}

pub fn room_type_color(room_type_id: Option<i64>) -> &'static str {
    match room_type_id {
        Some(id) if id != 0 => {
            ROOM_TYPE_PALETTE[id.rem_euclid(ROOM_TYPE_PALETTE.len() as i64) as usize]
        }
        _ => UNASSIGNED_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hotel, HotelType, ReservationStatus};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room_type(id: i64, name: &str) -> RoomType {
        RoomType {
            id: Some(id),
            name: name.into(),
            number_beds: "1".into(),
            max_occupancy: "2".into(),
            is_smoking_room: false,
        }
    }

    fn room(id: i64, number: i32, rt: &RoomType) -> Room {
        Room {
            id: Some(id),
            number,
            hotel: Hotel::new("Grand", HotelType::Business),
            room_type: rt.clone(),
        }
    }

    fn reservation(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Reservation {
        Reservation {
            id: Some(1),
            check_in_date: check_in,
            check_out_date: check_out,
            total_price: Decimal::new(300, 0),
            status: ReservationStatus::New,
            user: None,
            room: room.clone(),
        }
    }

    #[test]
    fn test_month_days_and_headers() {
        let feb = MonthView::new(2028, 2).unwrap();
        assert_eq!(feb.day_count(), 29);
        assert_eq!(feb.days().len(), 29);
        assert_eq!(feb.title(), "February 2028");

        let jan = MonthView::new(2026, 1).unwrap();
        let headers = jan.day_headers();
        assert_eq!(headers[0].day_name, "THU");
        assert_eq!(headers[4].label, "5 JAN");
        assert!(MonthView::new(2026, 13).is_none());
    }

    #[test]
    fn test_month_navigation() {
        let jan = MonthView::new(2026, 1).unwrap();
        assert_eq!(jan.previous(), MonthView::new(2025, 12).unwrap());
        assert_eq!(jan.next(), MonthView::new(2026, 2).unwrap());
        assert_eq!(MonthView::containing(date(2026, 3, 17)).first_day(), date(2026, 3, 1));
    }

    #[test]
    fn test_stay_inside_month() {
        let jan = MonthView::new(2026, 1).unwrap();
        let rt = room_type(1, "Single");
        let r = reservation(&room(5, 101, &rt), date(2026, 1, 10), date(2026, 1, 13));
        assert_eq!(
            jan.place(&r),
            Some(Placement {
                start_column: 10,
                span: 3
            })
        );
    }

    #[test]
    fn test_stay_crossing_month_boundaries() {
        let feb = MonthView::new(2026, 2).unwrap();
        let rt = room_type(1, "Single");
        let rm = room(5, 101, &rt);

        let from_january = reservation(&rm, date(2026, 1, 30), date(2026, 2, 3));
        assert_eq!(
            feb.place(&from_january),
            Some(Placement {
                start_column: 1,
                span: 2
            })
        );

        let into_march = reservation(&rm, date(2026, 2, 27), date(2026, 3, 5));
        assert_eq!(
            feb.place(&into_march),
            Some(Placement {
                start_column: 27,
                span: 2
            })
        );

        let whole_month = reservation(&rm, date(2026, 1, 1), date(2026, 4, 1));
        assert_eq!(feb.place(&whole_month).unwrap().span, 28);
    }

    #[test]
    fn test_hidden_stays() {
        let feb = MonthView::new(2026, 2).unwrap();
        let rt = room_type(1, "Single");
        let rm = room(5, 101, &rt);

        // checks out on the first day: no night in February
        let ends_on_first = reservation(&rm, date(2026, 1, 28), date(2026, 2, 1));
        assert_eq!(feb.place(&ends_on_first), None);

        let march = reservation(&rm, date(2026, 3, 1), date(2026, 3, 2));
        assert_eq!(feb.place(&march), None);

        let mut unsaved_room = reservation(&rm, date(2026, 2, 3), date(2026, 2, 4));
        unsaved_room.room.id = None;
        assert_eq!(feb.place(&unsaved_room), None);

        let shown = reservation(&rm, date(2026, 2, 3), date(2026, 2, 4));
        let all = [ends_on_first, march, unsaved_room, shown.clone()];
        assert_eq!(feb.visible(&all), vec![&shown]);
    }

    #[test]
    fn test_same_day_stay_spans_one_column() {
        let jan = MonthView::new(2026, 1).unwrap();
        assert_eq!(jan.span(date(2026, 1, 8), date(2026, 1, 8)), 1);
    }

    #[test]
    fn test_group_rooms_by_type_drops_empty_types() {
        let single = room_type(1, "Single");
        let double = room_type(2, "Double");
        let family = room_type(3, "Family");
        let rooms = vec![
            room(1, 101, &single),
            room(2, 102, &single),
            room(3, 201, &family),
        ];

        let rows = group_rooms_by_type(&[single, double, family], &rooms);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].room_type.name, "Single");
        assert_eq!(rows[0].rooms.len(), 2);
        assert_eq!(rows[1].room_type.name, "Family");
    }

    #[test]
    fn test_reservations_for_room() {
        let rt = room_type(1, "Single");
        let a = room(1, 101, &rt);
        let b = room(2, 102, &rt);
        let list = [
            reservation(&a, date(2026, 1, 1), date(2026, 1, 2)),
            reservation(&b, date(2026, 1, 1), date(2026, 1, 2)),
            reservation(&a, date(2026, 1, 5), date(2026, 1, 6)),
        ];
        assert_eq!(reservations_for_room(&list, 1).len(), 2);
    }

    #[test]
    fn test_room_type_colors() {
        assert_eq!(room_type_color(Some(1)), "#ef4444");
        assert_eq!(room_type_color(Some(9)), "#ef4444");
        assert_eq!(room_type_color(Some(8)), "#fb923c");
        assert_eq!(room_type_color(None), UNASSIGNED_COLOR);
        assert_eq!(room_type_color(Some(0)), UNASSIGNED_COLOR);
    }
}
