pub fn week() -> Vec<&'static str> {
    let mut days = Vec::with_capacity(7);
    enlist::enlist!(
        enlist::push_back(&mut days);
        "mon", "tue", "wed", "thu", "fri",
        #[repeat(2)] "off",
    );
    days
}
