use crate::error::{self, Color};
use crate::types::Measurement;

pub mod builder;

/// write a single evaluator run as a colored line: tag, distance and elapsed seconds
pub fn measurement(b: &mut builder::Builder, m: &Measurement) {
    error::print_str_colored(b, &format!("[{}]", m.algorithm.name()), Color::Cyan);
    b.write_char(' ');
    b.write_string(format!("distance {}", m.distance));
    error::print_str_colored(b, &format!(" found in {:.9}s", m.seconds), Color::Grey);
    b.write_char('\n');
}

/// write the closing summary block: one line per measurement and whether all evaluators agree on
/// the distance
pub fn summary(b: &mut builder::Builder, measurements: &[Measurement], agree: bool) {
    let Some(first) = measurements.first() else {
        return;
    };

    error::print_str_colored(b, &format!("{:=^72}\n", " Summary "), Color::Blue);
    for m in measurements {
        error::print_str_colored(
            b,
            &format!("[{}]", if agree { '+' } else { '-' }),
            if agree { Color::Green } else { Color::Red },
        );
        b.write_char(' ');
        b.write_str(m.algorithm.name());
        b.write_str(": ");
        b.write_string(format!("{}\n", m.distance));
    }
    b.write_char('\n');
    error::print_str_colored(b, "=>", Color::Blue);
    if agree {
        b.write_string(format!(
            " {}/{} evaluators agree on distance {}.\n",
            measurements.len(),
            measurements.len(),
            first.distance
        ));
    } else {
        b.write_str(" evaluators disagree on the distance, this is a bug.\n");
    }
}
