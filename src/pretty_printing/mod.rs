mod measure;
mod measure_set;
mod oracle;
mod pretty_print;
mod resolve;

pub use measure::Measure;
pub use measure_set::{MeasureSet, Taint};
pub use oracle::{all_layouts, layout_cost, oracular_pretty_print};
pub use pretty_print::{pretty_print, pretty_print_to_string, PrettyPrinted, PrintOptions};
pub use resolve::{process_concat, resolve};
