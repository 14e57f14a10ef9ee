//! Static hotel catalog

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::models::Hotel;

fn hotel(
    id: i64,
    name: &str,
    location: &str,
    description: &str,
    image: &str,
    price_per_night: i64,
    rating: f32,
    popular: bool,
) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        price_per_night: Decimal::from(price_per_night),
        rating,
        popular,
    }
}

static HOTELS: Lazy<Vec<Hotel>> = Lazy::new(|| {
    vec![
        hotel(
            1,
            "Hotel Mediterráneo",
            "Centro",
            "Hotel moderno en el corazón de la ciudad con todas las comodidades.",
            "https://images.unsplash.com/photo-1759264244746-140bbbc54e1b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb2Rlcm4lMjBsdXh1cnklMjBob3RlbCUyMHJvb218ZW58MXx8fHwxNzcxODkwMDUxfDA&ixlib=rb-4.1.0&q=80&w=1080",
            120,
            4.8,
            true,
        ),
        hotel(
            2,
            "Boutique Palace",
            "Zona histórica",
            "Encantador hotel boutique con arquitectura clásica y servicio personalizado.",
            "https://images.unsplash.com/photo-1764391707805-3623b906a8de?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxib3V0aXF1ZSUyMGhvdGVsJTIwZXh0ZXJpb3J8ZW58MXx8fHwxNzcxNzg2MDQ0fDA&ixlib=rb-4.1.0&q=80&w=1080",
            95,
            4.5,
            true,
        ),
        hotel(
            3,
            "Beach Resort Vista",
            "Playa",
            "Resort exclusivo frente al mar con vistas espectaculares.",
            "https://images.unsplash.com/photo-1729717949780-46e511489c3f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxyZXNvcnQlMjBob3RlbCUyMGJlYWNofGVufDF8fHx8MTc3MTc3MjQzN3ww&ixlib=rb-4.1.0&q=80&w=1080",
            180,
            4.9,
            false,
        ),
        hotel(
            4,
            "Grand Elegance Hotel",
            "Centro",
            "Hotel de lujo con lobby elegante y servicios de primera clase.",
            "https://images.unsplash.com/photo-1759462692354-404b2c995c99?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxlbGVnYW50JTIwaG90ZWwlMjBsb2JieXxlbnwxfHx8fDE3NzE4Mzk5Mzh8MA&ixlib=rb-4.1.0&q=80&w=1080",
            145,
            4.7,
            true,
        ),
        hotel(
            5,
            "Urban Tower Hotel",
            "Distrito financiero",
            "Moderno rascacielos con habitaciones panorámicas y excelente conectividad.",
            "https://images.unsplash.com/photo-1770017408222-dc83f61d9725?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjaXR5JTIwaG90ZWwlMjBidWlsZGluZ3xlbnwxfHx8fDE3NzE4MjI1MDV8MA&ixlib=rb-4.1.0&q=80&w=1080",
            110,
            4.4,
            false,
        ),
        hotel(
            6,
            "Cozy Comfort Inn",
            "Aeropuerto",
            "Hotel confortable cerca del aeropuerto, ideal para viajes de negocios.",
            "https://images.unsplash.com/photo-1631048835184-3f0ceda91b75?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHxob3RlbCUyMGJlZHJvb20lMjBpbnRlcmlvcnxlbnwxfHx8fDE3NzE4ODMyNDV8MA&ixlib=rb-4.1.0&q=80&w=1080",
            75,
            4.3,
            false,
        ),
    ]
});

/// The fixed set of bookable hotels.
///
/// There is no inventory behind this: the same six records are returned for
/// every search, in declaration order, with no filtering or pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// Every hotel, in catalog order.
    pub fn list_all(&self) -> &'static [Hotel] {
        &HOTELS
    }

    /// Look a hotel up by id. Total and idempotent: absent ids are always
    /// `None`, present ids always return the same record.
    pub fn find_by_id(&self, id: i64) -> Option<&'static Hotel> {
        HOTELS.iter().find(|h| h.id == id)
    }

    /// Like [`Catalog::find_by_id`], for callers that propagate the miss.
    pub fn get(&self, id: i64) -> AppResult<&'static Hotel> {
        self.find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("no hotel with id {}", id)))
    }
}
