pub mod gapminder_record;
pub mod wind_record;
