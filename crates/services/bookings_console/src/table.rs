// --- File: crates/services/bookings_console/src/table.rs ---
use bookings_common::Booking;

const HEADERS: [&str; 5] = ["ID", "Image", "Service", "Date", "Price"];

fn row(booking: &Booking) -> [String; 5] {
    [
        booking.id.clone(),
        booking.image.clone().unwrap_or_default(),
        booking.service.clone(),
        booking.date.clone(),
        booking
            .price
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    ]
}

/// Renders the bookings as a plain-text table with a count heading.
pub fn render(bookings: &[Booking]) -> String {
    let rows: Vec<[String; 5]> = bookings.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format!("Your bookings: {}\n", bookings.len());
    out.push_str(&format_line(&HEADERS.map(String::from)));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for cells in &rows {
        out.push_str(&format_line(cells));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookings_common::Price;

    #[test]
    fn test_render_empty() {
        let table = render(&[]);
        assert!(table.starts_with("Your bookings: 0\n"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_render_rows_in_order() {
        let bookings = vec![
            Booking::new("b", "Brakes", "2024-01-15").with_price(Price::Amount(80.0)),
            Booking::new("a", "Oil change", "2024-01-01").with_image("oil.png"),
        ];
        let table = render(&bookings);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Your bookings: 2");
        assert!(lines[1].starts_with("ID"));
        assert!(lines[3].starts_with("b "));
        assert!(lines[3].ends_with("80.00"));
        assert!(lines[4].starts_with("a "));
        assert!(lines[4].contains("oil.png"));
    }
}
