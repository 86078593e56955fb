//! Real Las Vegas / Henderson addresses for trip fixtures.

/// A named stop with its street address.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub address: &'static str,
}

impl Place {
    pub const fn new(name: &'static str, address: &'static str) -> Self {
        Self { name, address }
    }
}

pub const HOME: Place = Place::new("Home", "2780 S Jones Blvd, Las Vegas, NV 89146");

pub const ERRANDS: &[Place] = &[
    Place::new("Library", "833 Las Vegas Blvd N, Las Vegas, NV 89101"),
    Place::new("Post Office", "1001 E Sunset Rd, Las Vegas, NV 89119"),
    Place::new("Pharmacy", "3320 S Rainbow Blvd, Las Vegas, NV 89146"),
    Place::new("Hardware Store", "2250 S Rancho Dr, Las Vegas, NV 89102"),
    Place::new("Farmers Market", "1 Main St, Las Vegas, NV 89101"),
    Place::new("Dentist", "2830 S Jones Blvd #4, Las Vegas, NV 89146"),
    Place::new("Bakery", "4700 W Sahara Ave, Las Vegas, NV 89102"),
    Place::new("Dry Cleaner", "5025 S Eastern Ave #16, Las Vegas, NV 89119"),
    Place::new("Car Wash", "2595 S Decatur Blvd, Las Vegas, NV 89102"),
    Place::new("Henderson Pavilion", "200 S Green Valley Pkwy, Henderson, NV 89012"),
];

/// The first `n` errands.
pub fn errands(n: usize) -> Vec<Place> {
    ERRANDS.iter().take(n).copied().collect()
}
