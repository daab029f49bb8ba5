// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! English is the reference table: every key used anywhere must exist here.

pub(crate) const PHRASES: &[(&str, &str)] = &[
    // --- Presentation phrases ---
    ("ui.search", "Search"),
    ("ui.from", "From"),
    ("ui.to", "To"),
    ("ui.departure_date", "Departure date"),
    ("ui.return_date", "Return date"),
    ("ui.passengers", "Passengers"),
    ("ui.search_flights", "Search flights"),
    ("ui.search_hotels", "Search hotels"),
    ("ui.one_way", "One way"),
    ("ui.round_trip", "Round trip"),
    ("ui.cheapest_price", "Cheapest price"),
    ("ui.average_price", "Average price"),
    ("ui.most_expensive_price", "Most expensive price"),
    ("ui.direct_flights", "Direct flights"),
    ("ui.total_flights", "Scheduled flights"),
    ("ui.cheapest_day", "Cheapest day"),
    ("ui.cheapest_month", "Cheapest month"),
    ("ui.book_now", "Book now"),
    ("ui.see_all", "See all"),
    ("ui.read_more", "Read more"),
    ("ui.breadcrumb_home", "Home"),
    ("ui.flights_from", "Flights from"),
    ("ui.hotels_in", "Hotels in"),
    ("ui.airline_routes", "Popular routes"),
    ("ui.no_results", "No flights found for these dates"),
    // --- Section headings ---
    ("heading.booking_steps", "How to book"),
    ("heading.cancellation_policy", "Cancellation policy"),
    ("heading.classes", "Travel classes"),
    ("heading.destinations_overview", "Destinations overview"),
    ("heading.popular_destinations", "Popular destinations"),
    ("heading.places_to_visit", "Places to visit"),
    ("heading.city_info", "About the city"),
    ("heading.best_time_to_visit", "Best time to visit"),
    ("heading.faq", "Frequently asked questions"),
    // --- Subject labels, reused inside FAQ and section templates ---
    ("label.route", "flights from {departureCity} to {arrivalCity}"),
    ("label.single", "flights from {departureCity}"),
    (
        "label.airline_route",
        "{airlineName} flights from {departureCity} to {arrivalCity}",
    ),
    ("label.airline", "{airlineName} flights"),
    ("label.hotel", "hotels in {cityName}"),
    // --- Titles ---
    ("title.route", "Cheap flights from {departureCity} to {arrivalCity}"),
    ("title.single", "Cheap flights from {departureCity}"),
    (
        "title.airline_route",
        "{airlineName} flights from {departureCity} to {arrivalCity}",
    ),
    ("title.airline", "{airlineName}: flights, routes and booking"),
    ("title.hotel", "Hotels in {cityName}: compare prices and book"),
    // --- Descriptions ---
    (
        "description.route",
        "Compare cheap flights from {departureCity} to {arrivalCity}. Find the best fares, direct flights and the cheapest days to fly.",
    ),
    (
        "description.single",
        "Find cheap flights from {departureCity} to destinations around the world. Compare airlines, fares and direct routes.",
    ),
    (
        "description.airline_route",
        "Book {airlineName} flights from {departureCity} to {arrivalCity}. Check schedules, baggage rules and the lowest fares.",
    ),
    (
        "description.airline",
        "Everything about {airlineName}: popular routes, travel classes, baggage and how to book at the best price.",
    ),
    (
        "description.hotel",
        "Compare hotels in {cityName}, from budget stays to luxury resorts, and book at the best price.",
    ),
    // --- SEO keywords ---
    (
        "seo.keywords.route",
        "flights {departureCity} {arrivalCity}, cheap tickets {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.single",
        "flights from {departureCity}, {departureCode} airport, cheap flights {departureCity}",
    ),
    (
        "seo.keywords.airline_route",
        "{airlineName}, {airlineName} {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.airline",
        "{airlineName}, {airlineName} flights, {airlineName} booking",
    ),
    (
        "seo.keywords.hotel",
        "hotels {cityName}, cheap hotels {cityName}, where to stay in {cityName}",
    ),
    // --- Generated sections ---
    (
        "section.booking_steps",
        "<ol><li>Enter {placeName} and your travel dates in the search form.</li><li>Compare {label} by price, duration and number of stops.</li><li>Choose the fare that suits you and continue to the booking page.</li><li>Add passenger details and pay securely.</li></ol>",
    ),
    (
        "section.booking_steps.hotel",
        "<ol><li>Enter {cityName} and your check-in and check-out dates.</li><li>Filter {label} by price, rating and location.</li><li>Pick a room and review the cancellation terms.</li><li>Confirm the booking with your payment details.</li></ol>",
    ),
    (
        "section.cancellation_policy",
        "<p>Cancellation rules for {label} depend on the fare you buy. Flexible fares can usually be changed or refunded, while basic fares are often non-refundable. Always check the fare conditions before paying.</p>",
    ),
    (
        "section.cancellation_policy.hotel",
        "<p>Many {label} offer free cancellation up to a set date before arrival. Non-refundable rates are cheaper but cannot be changed. The exact terms are shown before you confirm.</p>",
    ),
    (
        "section.classes",
        "<p>Most {label} offer economy class, and many also sell premium economy, business and first class with more space, flexible tickets and extra baggage.</p>",
    ),
    (
        "section.classes.airline",
        "<p>{airlineName} sells several travel classes. Economy covers the essentials, while premium cabins add lounge access, priority boarding and more legroom.</p>",
    ),
    (
        "section.classes.hotel",
        "<p>Accommodation in {cityName} ranges from hostels and budget rooms to boutique hotels and five-star resorts.</p>",
    ),
    (
        "section.destinations_overview",
        "<p>{placeName} is served by {airlines} airlines with {totalFlights} scheduled flights, {directFlights} of them direct.</p>",
    ),
    (
        "section.destinations_overview.none",
        "<p>{placeName} connects to destinations across the region. Search with your dates to see every route on sale.</p>",
    ),
    (
        "section.popular_destinations",
        "<p>Travellers searching for {label} also look at nearby cities and seasonal routes. Use the search form to compare fares to other destinations.</p>",
    ),
    (
        "section.places_to_visit",
        "<p>{placeName} has museums, historic districts, parks and local markets worth exploring. Plan a day or two to see the main sights.</p>",
    ),
    (
        "section.city_info",
        "<p>{placeName} is a popular travel destination with good transport links, a wide choice of hotels and plenty of restaurants.</p>",
    ),
    (
        "section.best_time_to_visit",
        "<p>Prices are usually lowest in {cheapestMonth}. Spring and autumn bring mild weather and fewer crowds to {placeName}.</p>",
    ),
    (
        "section.booking_steps.airline",
        "<ol><li>Enter your departure and arrival cities in the search form.</li><li>Filter the results to show {label} only.</li><li>Compare fares, times and baggage allowances.</li><li>Book on the {airlineName} fare you choose and pay securely.</li></ol>",
    ),
    (
        "section.destinations_overview.airline",
        "<p>{airlineName} flies to destinations across several continents from its main hubs. Search with your dates to see every {airlineName} route on sale.</p>",
    ),
    (
        "section.places_to_visit.airline",
        "<p>The {airlineName} network covers capitals, beach resorts and business hubs. Browse its routes to plan your next trip.</p>",
    ),
    (
        "section.city_info.airline",
        "<p>{airlineName} is an international airline offering scheduled passenger flights, connecting services and a frequent flyer programme.</p>",
    ),
    (
        "section.best_time_to_visit.airline",
        "<p>{airlineName} fares are usually lowest in {cheapestMonth}, while summer and holiday periods are the most expensive.</p>",
    ),
    // --- FAQ ---
    ("faq.price.q", "How much do {label} cost?"),
    (
        "faq.price.a",
        "The cheapest fare we found was {price}, and the average price is {avgPrice}.",
    ),
    (
        "faq.price.a_none",
        "Prices change daily. Search with your dates to see current fares.",
    ),
    ("faq.destinations.q", "How many destinations are served?"),
    (
        "faq.destinations.a",
        "There are flights to {destinations} destinations with {airlines} airlines.",
    ),
    (
        "faq.destinations.a_none",
        "Use the search form to see every destination currently on sale.",
    ),
    ("faq.cheapest_day.q", "What is the cheapest day to book {label}?"),
    (
        "faq.cheapest_day.a",
        "{cheapestDay} is usually the cheapest day, based on recent prices.",
    ),
    ("faq.best_season.q", "When is the best season to travel?"),
    (
        "faq.best_season.a",
        "{cheapestMonth} usually has the lowest prices, while summer and holidays are the most expensive.",
    ),
    ("faq.booking.q", "How do I book {label}?"),
    (
        "faq.booking.a",
        "Enter your dates in the search form, compare the offers and complete the booking with the provider you choose.",
    ),
    // --- Formatting ---
    ("price.format", "{symbol}{amount}"),
    ("weekday.monday", "Monday"),
    ("weekday.tuesday", "Tuesday"),
    ("weekday.wednesday", "Wednesday"),
    ("weekday.thursday", "Thursday"),
    ("weekday.friday", "Friday"),
    ("weekday.saturday", "Saturday"),
    ("weekday.sunday", "Sunday"),
    ("month.january", "January"),
    ("month.february", "February"),
    ("month.march", "March"),
    ("month.april", "April"),
    ("month.may", "May"),
    ("month.june", "June"),
    ("month.july", "July"),
    ("month.august", "August"),
    ("month.september", "September"),
    ("month.october", "October"),
    ("month.november", "November"),
    ("month.december", "December"),
];
