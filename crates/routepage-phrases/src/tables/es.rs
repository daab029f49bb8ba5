// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub(crate) const PHRASES: &[(&str, &str)] = &[
    // --- Presentation phrases ---
    ("ui.search", "Buscar"),
    ("ui.from", "Origen"),
    ("ui.to", "Destino"),
    ("ui.departure_date", "Fecha de ida"),
    ("ui.return_date", "Fecha de vuelta"),
    ("ui.passengers", "Pasajeros"),
    ("ui.search_flights", "Buscar vuelos"),
    ("ui.search_hotels", "Buscar hoteles"),
    ("ui.one_way", "Solo ida"),
    ("ui.round_trip", "Ida y vuelta"),
    ("ui.cheapest_price", "Precio más bajo"),
    ("ui.average_price", "Precio medio"),
    ("ui.most_expensive_price", "Precio más alto"),
    ("ui.direct_flights", "Vuelos directos"),
    ("ui.total_flights", "Vuelos programados"),
    ("ui.cheapest_day", "Día más barato"),
    ("ui.cheapest_month", "Mes más barato"),
    ("ui.book_now", "Reservar ahora"),
    ("ui.see_all", "Ver todo"),
    ("ui.read_more", "Leer más"),
    ("ui.breadcrumb_home", "Inicio"),
    ("ui.flights_from", "Vuelos desde"),
    ("ui.hotels_in", "Hoteles en"),
    ("ui.airline_routes", "Rutas populares"),
    ("ui.no_results", "No hay vuelos para estas fechas"),
    // --- Section headings ---
    ("heading.booking_steps", "Cómo reservar"),
    ("heading.cancellation_policy", "Política de cancelación"),
    ("heading.classes", "Clases de viaje"),
    ("heading.destinations_overview", "Resumen de destinos"),
    ("heading.popular_destinations", "Destinos populares"),
    ("heading.places_to_visit", "Lugares para visitar"),
    ("heading.city_info", "Sobre la ciudad"),
    ("heading.best_time_to_visit", "Mejor época para viajar"),
    ("heading.faq", "Preguntas frecuentes"),
    // --- Subject labels ---
    ("label.route", "vuelos de {departureCity} a {arrivalCity}"),
    ("label.single", "vuelos desde {departureCity}"),
    (
        "label.airline_route",
        "vuelos de {airlineName} de {departureCity} a {arrivalCity}",
    ),
    ("label.airline", "vuelos de {airlineName}"),
    ("label.hotel", "hoteles en {cityName}"),
    // --- Titles ---
    ("title.route", "Vuelos baratos de {departureCity} a {arrivalCity}"),
    ("title.single", "Vuelos baratos desde {departureCity}"),
    (
        "title.airline_route",
        "Vuelos de {airlineName} de {departureCity} a {arrivalCity}",
    ),
    ("title.airline", "{airlineName}: vuelos, rutas y reservas"),
    ("title.hotel", "Hoteles en {cityName}: compara precios y reserva"),
    // --- Descriptions ---
    (
        "description.route",
        "Compara vuelos baratos de {departureCity} a {arrivalCity}. Encuentra las mejores tarifas, vuelos directos y los días más baratos para volar.",
    ),
    (
        "description.single",
        "Encuentra vuelos baratos desde {departureCity} a destinos de todo el mundo. Compara aerolíneas, tarifas y rutas directas.",
    ),
    (
        "description.airline_route",
        "Reserva vuelos de {airlineName} de {departureCity} a {arrivalCity}. Consulta horarios, equipaje y las tarifas más bajas.",
    ),
    (
        "description.airline",
        "Todo sobre {airlineName}: rutas populares, clases de viaje, equipaje y cómo reservar al mejor precio.",
    ),
    (
        "description.hotel",
        "Compara hoteles en {cityName}, desde alojamientos económicos hasta resorts de lujo, y reserva al mejor precio.",
    ),
    // --- SEO keywords ---
    (
        "seo.keywords.route",
        "vuelos {departureCity} {arrivalCity}, billetes baratos {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.single",
        "vuelos desde {departureCity}, aeropuerto {departureCode}, vuelos baratos {departureCity}",
    ),
    (
        "seo.keywords.airline_route",
        "{airlineName}, {airlineName} {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.airline",
        "{airlineName}, vuelos {airlineName}, reservas {airlineName}",
    ),
    (
        "seo.keywords.hotel",
        "hoteles {cityName}, hoteles baratos {cityName}, dónde alojarse en {cityName}",
    ),
    // --- Generated sections ---
    (
        "section.booking_steps",
        "<ol><li>Introduce {placeName} y tus fechas de viaje en el buscador.</li><li>Compara {label} por precio, duración y número de escalas.</li><li>Elige la tarifa que más te convenga y continúa a la página de reserva.</li><li>Añade los datos de los pasajeros y paga de forma segura.</li></ol>",
    ),
    (
        "section.booking_steps.hotel",
        "<ol><li>Introduce {cityName} y tus fechas de entrada y salida.</li><li>Filtra {label} por precio, valoración y ubicación.</li><li>Elige una habitación y revisa las condiciones de cancelación.</li><li>Confirma la reserva con tus datos de pago.</li></ol>",
    ),
    (
        "section.cancellation_policy",
        "<p>Las condiciones de cancelación de {label} dependen de la tarifa. Las tarifas flexibles suelen permitir cambios o reembolsos, mientras que las básicas a menudo no son reembolsables. Revisa siempre las condiciones antes de pagar.</p>",
    ),
    (
        "section.cancellation_policy.hotel",
        "<p>Muchos {label} ofrecen cancelación gratuita hasta una fecha determinada antes de la llegada. Las tarifas no reembolsables son más baratas pero no admiten cambios. Verás las condiciones exactas antes de confirmar.</p>",
    ),
    (
        "section.classes",
        "<p>La mayoría de {label} ofrecen clase turista, y muchos también venden turista premium, business y primera clase con más espacio, billetes flexibles y equipaje adicional.</p>",
    ),
    (
        "section.classes.airline",
        "<p>{airlineName} vende varias clases de viaje. La clase turista cubre lo esencial, mientras que las cabinas premium añaden sala VIP, embarque prioritario y más espacio.</p>",
    ),
    (
        "section.classes.hotel",
        "<p>El alojamiento en {cityName} va desde albergues y habitaciones económicas hasta hoteles boutique y resorts de cinco estrellas.</p>",
    ),
    (
        "section.destinations_overview",
        "<p>{placeName} cuenta con {airlines} aerolíneas y {totalFlights} vuelos programados, {directFlights} de ellos directos.</p>",
    ),
    (
        "section.destinations_overview.none",
        "<p>{placeName} conecta con destinos de toda la región. Busca con tus fechas para ver todas las rutas disponibles.</p>",
    ),
    (
        "section.popular_destinations",
        "<p>Quienes buscan {label} también consultan ciudades cercanas y rutas de temporada. Usa el buscador para comparar tarifas a otros destinos.</p>",
    ),
    (
        "section.places_to_visit",
        "<p>{placeName} tiene museos, barrios históricos, parques y mercados locales que merece la pena descubrir. Reserva uno o dos días para ver lo principal.</p>",
    ),
    (
        "section.city_info",
        "<p>{placeName} es un destino muy popular, con buenas conexiones de transporte, una amplia oferta de hoteles y muchos restaurantes.</p>",
    ),
    (
        "section.best_time_to_visit",
        "<p>Los precios suelen ser más bajos en {cheapestMonth}. La primavera y el otoño traen un clima suave y menos turistas a {placeName}.</p>",
    ),
    (
        "section.booking_steps.airline",
        "<ol><li>Introduce tu ciudad de origen y de destino en el buscador.</li><li>Filtra los resultados para ver solo {label}.</li><li>Compara tarifas, horarios y equipaje incluido.</li><li>Reserva la tarifa de {airlineName} que elijas y paga de forma segura.</li></ol>",
    ),
    (
        "section.destinations_overview.airline",
        "<p>{airlineName} vuela a destinos de varios continentes desde sus principales aeropuertos. Busca con tus fechas para ver todas las rutas de {airlineName} a la venta.</p>",
    ),
    (
        "section.places_to_visit.airline",
        "<p>La red de {airlineName} incluye capitales, destinos de playa y centros de negocios. Consulta sus rutas para planear tu próximo viaje.</p>",
    ),
    (
        "section.city_info.airline",
        "<p>{airlineName} es una aerolínea internacional con vuelos regulares de pasajeros, conexiones y un programa de viajero frecuente.</p>",
    ),
    (
        "section.best_time_to_visit.airline",
        "<p>Las tarifas de {airlineName} suelen ser más bajas en {cheapestMonth}, mientras que el verano y los festivos son más caros.</p>",
    ),
    // --- FAQ ---
    ("faq.price.q", "¿Cuánto cuestan los {label}?"),
    (
        "faq.price.a",
        "La tarifa más barata que encontramos fue de {price} y el precio medio es de {avgPrice}.",
    ),
    (
        "faq.price.a_none",
        "Los precios cambian a diario. Busca con tus fechas para ver las tarifas actuales.",
    ),
    ("faq.destinations.q", "¿Cuántos destinos hay disponibles?"),
    (
        "faq.destinations.a",
        "Hay vuelos a {destinations} destinos con {airlines} aerolíneas.",
    ),
    (
        "faq.destinations.a_none",
        "Usa el buscador para ver todos los destinos a la venta.",
    ),
    ("faq.cheapest_day.q", "¿Cuál es el día más barato para reservar {label}?"),
    (
        "faq.cheapest_day.a",
        "Según los precios recientes, el {cheapestDay} suele ser el día más barato.",
    ),
    ("faq.best_season.q", "¿Cuál es la mejor época para viajar?"),
    (
        "faq.best_season.a",
        "{cheapestMonth} suele tener los precios más bajos, mientras que el verano y los festivos son más caros.",
    ),
    ("faq.booking.q", "¿Cómo reservo {label}?"),
    (
        "faq.booking.a",
        "Introduce tus fechas en el buscador, compara las ofertas y completa la reserva con el proveedor que elijas.",
    ),
    // --- Formatting ---
    ("price.format", "{amount} {symbol}"),
    ("weekday.monday", "lunes"),
    ("weekday.tuesday", "martes"),
    ("weekday.wednesday", "miércoles"),
    ("weekday.thursday", "jueves"),
    ("weekday.friday", "viernes"),
    ("weekday.saturday", "sábado"),
    ("weekday.sunday", "domingo"),
    ("month.january", "enero"),
    ("month.february", "febrero"),
    ("month.march", "marzo"),
    ("month.april", "abril"),
    ("month.may", "mayo"),
    ("month.june", "junio"),
    ("month.july", "julio"),
    ("month.august", "agosto"),
    ("month.september", "septiembre"),
    ("month.october", "octubre"),
    ("month.november", "noviembre"),
    ("month.december", "diciembre"),
];
