// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub(crate) const PHRASES: &[(&str, &str)] = &[
    // --- Presentation phrases ---
    ("ui.search", "Rechercher"),
    ("ui.from", "Départ"),
    ("ui.to", "Arrivée"),
    ("ui.departure_date", "Date de départ"),
    ("ui.return_date", "Date de retour"),
    ("ui.passengers", "Passagers"),
    ("ui.search_flights", "Rechercher des vols"),
    ("ui.search_hotels", "Rechercher des hôtels"),
    ("ui.one_way", "Aller simple"),
    ("ui.round_trip", "Aller-retour"),
    ("ui.cheapest_price", "Prix le plus bas"),
    ("ui.average_price", "Prix moyen"),
    ("ui.most_expensive_price", "Prix le plus élevé"),
    ("ui.direct_flights", "Vols directs"),
    ("ui.total_flights", "Vols programmés"),
    ("ui.cheapest_day", "Jour le moins cher"),
    ("ui.cheapest_month", "Mois le moins cher"),
    ("ui.book_now", "Réserver"),
    ("ui.see_all", "Tout voir"),
    ("ui.read_more", "En savoir plus"),
    ("ui.breadcrumb_home", "Accueil"),
    ("ui.flights_from", "Vols au départ de"),
    ("ui.hotels_in", "Hôtels à"),
    ("ui.airline_routes", "Lignes populaires"),
    ("ui.no_results", "Aucun vol trouvé pour ces dates"),
    // --- Section headings ---
    ("heading.booking_steps", "Comment réserver"),
    ("heading.cancellation_policy", "Conditions d'annulation"),
    ("heading.classes", "Classes de voyage"),
    ("heading.destinations_overview", "Aperçu des destinations"),
    ("heading.popular_destinations", "Destinations populaires"),
    ("heading.places_to_visit", "Lieux à visiter"),
    ("heading.city_info", "À propos de la ville"),
    ("heading.best_time_to_visit", "Meilleure période pour partir"),
    ("heading.faq", "Questions fréquentes"),
    // --- Subject labels ---
    (
        "label.route",
        "vols au départ de {departureCity} vers {arrivalCity}",
    ),
    ("label.single", "vols au départ de {departureCity}"),
    (
        "label.airline_route",
        "vols {airlineName} au départ de {departureCity} vers {arrivalCity}",
    ),
    ("label.airline", "vols {airlineName}"),
    ("label.hotel", "hôtels à {cityName}"),
    // --- Titles ---
    (
        "title.route",
        "Vols pas chers au départ de {departureCity} vers {arrivalCity}",
    ),
    ("title.single", "Vols pas chers au départ de {departureCity}"),
    (
        "title.airline_route",
        "Vols {airlineName} au départ de {departureCity} vers {arrivalCity}",
    ),
    ("title.airline", "{airlineName} : vols, lignes et réservation"),
    ("title.hotel", "Hôtels à {cityName} : comparez les prix et réservez"),
    // --- Descriptions ---
    (
        "description.route",
        "Comparez les vols pas chers au départ de {departureCity} vers {arrivalCity}. Trouvez les meilleurs tarifs, les vols directs et les jours les moins chers.",
    ),
    (
        "description.single",
        "Trouvez des vols pas chers au départ de {departureCity} vers le monde entier. Comparez compagnies, tarifs et lignes directes.",
    ),
    (
        "description.airline_route",
        "Réservez vos vols {airlineName} au départ de {departureCity} vers {arrivalCity}. Horaires, bagages et tarifs les plus bas.",
    ),
    (
        "description.airline",
        "Tout sur {airlineName} : lignes populaires, classes de voyage, bagages et réservation au meilleur prix.",
    ),
    (
        "description.hotel",
        "Comparez les hôtels à {cityName}, des adresses économiques aux complexes de luxe, et réservez au meilleur prix.",
    ),
    // --- SEO keywords ---
    (
        "seo.keywords.route",
        "vols {departureCity} {arrivalCity}, billets pas chers {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.single",
        "vols au départ de {departureCity}, aéroport {departureCode}, vols pas chers {departureCity}",
    ),
    (
        "seo.keywords.airline_route",
        "{airlineName}, {airlineName} {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.airline",
        "{airlineName}, vols {airlineName}, réservation {airlineName}",
    ),
    (
        "seo.keywords.hotel",
        "hôtels {cityName}, hôtels pas chers {cityName}, où dormir à {cityName}",
    ),
    // --- Generated sections ---
    (
        "section.booking_steps",
        "<ol><li>Saisissez {placeName} et vos dates de voyage dans le formulaire de recherche.</li><li>Comparez les {label} selon le prix, la durée et le nombre d'escales.</li><li>Choisissez le tarif qui vous convient et poursuivez vers la page de réservation.</li><li>Ajoutez les informations des passagers et payez en toute sécurité.</li></ol>",
    ),
    (
        "section.booking_steps.hotel",
        "<ol><li>Saisissez {cityName} et vos dates d'arrivée et de départ.</li><li>Filtrez les {label} par prix, note et emplacement.</li><li>Choisissez une chambre et vérifiez les conditions d'annulation.</li><li>Confirmez la réservation avec vos informations de paiement.</li></ol>",
    ),
    (
        "section.cancellation_policy",
        "<p>Les conditions d'annulation des {label} dépendent du tarif choisi. Les tarifs flexibles sont généralement modifiables ou remboursables, tandis que les tarifs de base sont souvent non remboursables. Vérifiez toujours les conditions avant de payer.</p>",
    ),
    (
        "section.cancellation_policy.hotel",
        "<p>De nombreux {label} proposent l'annulation gratuite jusqu'à une date donnée avant l'arrivée. Les tarifs non remboursables sont moins chers mais non modifiables. Les conditions exactes s'affichent avant la confirmation.</p>",
    ),
    (
        "section.classes",
        "<p>La plupart des {label} proposent la classe économique, et beaucoup vendent aussi l'économique premium, la classe affaires et la première classe avec plus d'espace, des billets flexibles et des bagages supplémentaires.</p>",
    ),
    (
        "section.classes.airline",
        "<p>{airlineName} propose plusieurs classes de voyage. L'économique couvre l'essentiel, tandis que les cabines premium ajoutent l'accès au salon, l'embarquement prioritaire et plus d'espace.</p>",
    ),
    (
        "section.classes.hotel",
        "<p>L'hébergement à {cityName} va des auberges et chambres économiques aux hôtels de charme et complexes cinq étoiles.</p>",
    ),
    (
        "section.destinations_overview",
        "<p>{placeName} est desservie par {airlines} compagnies avec {totalFlights} vols programmés, dont {directFlights} directs.</p>",
    ),
    (
        "section.destinations_overview.none",
        "<p>{placeName} est reliée à des destinations dans toute la région. Lancez une recherche avec vos dates pour voir toutes les lignes en vente.</p>",
    ),
    (
        "section.popular_destinations",
        "<p>Les voyageurs qui recherchent des {label} consultent aussi les villes voisines et les lignes saisonnières. Utilisez le formulaire pour comparer les tarifs vers d'autres destinations.</p>",
    ),
    (
        "section.places_to_visit",
        "<p>{placeName} compte des musées, des quartiers historiques, des parcs et des marchés locaux à découvrir. Prévoyez un ou deux jours pour l'essentiel.</p>",
    ),
    (
        "section.city_info",
        "<p>{placeName} est une destination prisée, avec de bonnes liaisons de transport, un large choix d'hôtels et de nombreux restaurants.</p>",
    ),
    (
        "section.best_time_to_visit",
        "<p>Les prix sont généralement les plus bas en {cheapestMonth}. Le printemps et l'automne offrent un climat doux et moins de monde à {placeName}.</p>",
    ),
    (
        "section.booking_steps.airline",
        "<ol><li>Saisissez vos villes de départ et d'arrivée dans le formulaire de recherche.</li><li>Filtrez les résultats pour n'afficher que les {label}.</li><li>Comparez les tarifs, les horaires et les franchises bagages.</li><li>Réservez le tarif {airlineName} choisi et payez en toute sécurité.</li></ol>",
    ),
    (
        "section.destinations_overview.airline",
        "<p>{airlineName} dessert des destinations sur plusieurs continents depuis ses principaux hubs. Lancez une recherche avec vos dates pour voir toutes les lignes {airlineName} en vente.</p>",
    ),
    (
        "section.places_to_visit.airline",
        "<p>Le réseau {airlineName} relie capitales, stations balnéaires et centres d'affaires. Parcourez ses lignes pour préparer votre prochain voyage.</p>",
    ),
    (
        "section.city_info.airline",
        "<p>{airlineName} est une compagnie aérienne internationale proposant des vols réguliers, des correspondances et un programme de fidélité.</p>",
    ),
    (
        "section.best_time_to_visit.airline",
        "<p>Les tarifs {airlineName} sont généralement les plus bas en {cheapestMonth}, alors que l'été et les vacances sont plus chers.</p>",
    ),
    // --- FAQ ---
    ("faq.price.q", "Combien coûtent les {label} ?"),
    (
        "faq.price.a",
        "Le tarif le plus bas trouvé était de {price}, et le prix moyen est de {avgPrice}.",
    ),
    (
        "faq.price.a_none",
        "Les prix changent chaque jour. Lancez une recherche avec vos dates pour voir les tarifs actuels.",
    ),
    ("faq.destinations.q", "Combien de destinations sont desservies ?"),
    (
        "faq.destinations.a",
        "Il existe des vols vers {destinations} destinations avec {airlines} compagnies.",
    ),
    (
        "faq.destinations.a_none",
        "Utilisez le formulaire de recherche pour voir toutes les destinations en vente.",
    ),
    (
        "faq.cheapest_day.q",
        "Quel est le jour le moins cher pour réserver des {label} ?",
    ),
    (
        "faq.cheapest_day.a",
        "D'après les prix récents, le {cheapestDay} est généralement le jour le moins cher.",
    ),
    ("faq.best_season.q", "Quelle est la meilleure saison pour voyager ?"),
    (
        "faq.best_season.a",
        "Les prix sont généralement les plus bas en {cheapestMonth}, alors que l'été et les vacances sont plus chers.",
    ),
    ("faq.booking.q", "Comment réserver des {label} ?"),
    (
        "faq.booking.a",
        "Saisissez vos dates dans le formulaire, comparez les offres et finalisez la réservation auprès du prestataire choisi.",
    ),
    // --- Formatting ---
    ("price.format", "{amount} {symbol}"),
    ("weekday.monday", "lundi"),
    ("weekday.tuesday", "mardi"),
    ("weekday.wednesday", "mercredi"),
    ("weekday.thursday", "jeudi"),
    ("weekday.friday", "vendredi"),
    ("weekday.saturday", "samedi"),
    ("weekday.sunday", "dimanche"),
    ("month.january", "janvier"),
    ("month.february", "février"),
    ("month.march", "mars"),
    ("month.april", "avril"),
    ("month.may", "mai"),
    ("month.june", "juin"),
    ("month.july", "juillet"),
    ("month.august", "août"),
    ("month.september", "septembre"),
    ("month.october", "octobre"),
    ("month.november", "novembre"),
    ("month.december", "décembre"),
];
