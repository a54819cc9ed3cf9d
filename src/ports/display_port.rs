//! Display port for the on-chart trend label.

pub trait LabelDisplay {
    fn show_label(&mut self, text: &str);
}
