// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! City names are substituted in the nominative case, so templates avoid
//! prepositions that would require declension ("из {city}") and use dash or
//! "город {city}" constructions instead.

pub(crate) const PHRASES: &[(&str, &str)] = &[
    // --- Presentation phrases ---
    ("ui.search", "Найти"),
    ("ui.from", "Откуда"),
    ("ui.to", "Куда"),
    ("ui.departure_date", "Дата вылета"),
    ("ui.return_date", "Дата возвращения"),
    ("ui.passengers", "Пассажиры"),
    ("ui.search_flights", "Найти билеты"),
    ("ui.search_hotels", "Найти отели"),
    ("ui.one_way", "В одну сторону"),
    ("ui.round_trip", "Туда и обратно"),
    ("ui.cheapest_price", "Самая низкая цена"),
    ("ui.average_price", "Средняя цена"),
    ("ui.most_expensive_price", "Самая высокая цена"),
    ("ui.direct_flights", "Прямые рейсы"),
    ("ui.total_flights", "Рейсы по расписанию"),
    ("ui.cheapest_day", "Самый дешёвый день"),
    ("ui.cheapest_month", "Самый дешёвый месяц"),
    ("ui.book_now", "Забронировать"),
    ("ui.see_all", "Смотреть все"),
    ("ui.read_more", "Подробнее"),
    ("ui.breadcrumb_home", "Главная"),
    ("ui.flights_from", "Рейсы из города"),
    ("ui.hotels_in", "Отели в городе"),
    ("ui.airline_routes", "Популярные направления"),
    ("ui.no_results", "На эти даты рейсов не найдено"),
    // --- Section headings ---
    ("heading.booking_steps", "Как забронировать"),
    ("heading.cancellation_policy", "Правила отмены"),
    ("heading.classes", "Классы обслуживания"),
    ("heading.destinations_overview", "Обзор направлений"),
    ("heading.popular_destinations", "Популярные направления"),
    ("heading.places_to_visit", "Что посмотреть"),
    ("heading.city_info", "О городе"),
    ("heading.best_time_to_visit", "Лучшее время для поездки"),
    ("heading.faq", "Частые вопросы"),
    // --- Subject labels ---
    ("label.route", "авиабилеты {departureCity} — {arrivalCity}"),
    ("label.single", "авиабилеты из города {departureCity}"),
    (
        "label.airline_route",
        "рейсы {airlineName} {departureCity} — {arrivalCity}",
    ),
    ("label.airline", "рейсы авиакомпании {airlineName}"),
    ("label.hotel", "отели в городе {cityName}"),
    // --- Titles ---
    (
        "title.route",
        "Дешёвые авиабилеты {departureCity} — {arrivalCity}",
    ),
    ("title.single", "Дешёвые авиабилеты из города {departureCity}"),
    (
        "title.airline_route",
        "Рейсы {airlineName} {departureCity} — {arrivalCity}",
    ),
    (
        "title.airline",
        "Авиакомпания {airlineName}: рейсы, направления и бронирование",
    ),
    ("title.hotel", "Отели в городе {cityName}: сравнить цены и забронировать"),
    // --- Descriptions ---
    (
        "description.route",
        "Сравните дешёвые авиабилеты {departureCity} — {arrivalCity}. Лучшие тарифы, прямые рейсы и самые выгодные дни для вылета.",
    ),
    (
        "description.single",
        "Дешёвые авиабилеты из города {departureCity} по всему миру. Сравните авиакомпании, тарифы и прямые направления.",
    ),
    (
        "description.airline_route",
        "Бронируйте рейсы {airlineName} {departureCity} — {arrivalCity}. Расписание, правила провоза багажа и самые низкие тарифы.",
    ),
    (
        "description.airline",
        "Всё об авиакомпании {airlineName}: популярные направления, классы обслуживания, багаж и выгодное бронирование.",
    ),
    (
        "description.hotel",
        "Сравните отели в городе {cityName}, от недорогих номеров до роскошных курортов, и бронируйте по лучшей цене.",
    ),
    // --- SEO keywords ---
    (
        "seo.keywords.route",
        "авиабилеты {departureCity} {arrivalCity}, дешёвые билеты {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.single",
        "авиабилеты {departureCity}, аэропорт {departureCode}, дешёвые рейсы {departureCity}",
    ),
    (
        "seo.keywords.airline_route",
        "{airlineName}, {airlineName} {departureCity} {arrivalCity}, {departureCode} {arrivalCode}",
    ),
    (
        "seo.keywords.airline",
        "{airlineName}, рейсы {airlineName}, бронирование {airlineName}",
    ),
    (
        "seo.keywords.hotel",
        "отели {cityName}, дешёвые отели {cityName}, где остановиться {cityName}",
    ),
    // --- Generated sections ---
    (
        "section.booking_steps",
        "<ol><li>Укажите {placeName} и даты поездки в форме поиска.</li><li>Сравните {label} по цене, времени в пути и числу пересадок.</li><li>Выберите подходящий тариф и перейдите на страницу бронирования.</li><li>Введите данные пассажиров и оплатите билет.</li></ol>",
    ),
    (
        "section.booking_steps.hotel",
        "<ol><li>Укажите город {cityName} и даты заезда и выезда.</li><li>Отфильтруйте {label} по цене, рейтингу и расположению.</li><li>Выберите номер и проверьте условия отмены.</li><li>Подтвердите бронирование и оплатите.</li></ol>",
    ),
    (
        "section.cancellation_policy",
        "<p>Условия отмены для направления {label} зависят от тарифа. Гибкие тарифы обычно можно изменить или вернуть, а базовые часто невозвратные. Проверяйте условия тарифа до оплаты.</p>",
    ),
    (
        "section.cancellation_policy.hotel",
        "<p>Многие {label} предлагают бесплатную отмену до определённой даты. Невозвратные тарифы дешевле, но их нельзя изменить. Точные условия показываются перед подтверждением.</p>",
    ),
    (
        "section.classes",
        "<p>На направлении {label} почти всегда доступен эконом-класс, а многие перевозчики продают также премиум-эконом, бизнес и первый класс с большим комфортом, гибкими билетами и дополнительным багажом.</p>",
    ),
    (
        "section.classes.airline",
        "<p>{airlineName} предлагает несколько классов обслуживания. Эконом включает всё необходимое, а премиальные салоны добавляют доступ в бизнес-зал, приоритетную посадку и больше места.</p>",
    ),
    (
        "section.classes.hotel",
        "<p>Жильё в городе {cityName} — от хостелов и недорогих номеров до бутик-отелей и пятизвёздочных курортов.</p>",
    ),
    (
        "section.destinations_overview",
        "<p>Город {placeName} обслуживают {airlines} авиакомпаний, в расписании {totalFlights} рейсов, из них прямых — {directFlights}.</p>",
    ),
    (
        "section.destinations_overview.none",
        "<p>Город {placeName} связан с направлениями по всему региону. Укажите даты, чтобы увидеть все доступные рейсы.</p>",
    ),
    (
        "section.popular_destinations",
        "<p>Те, кто ищет {label}, также смотрят соседние города и сезонные направления. Сравните цены на другие направления в форме поиска.</p>",
    ),
    (
        "section.places_to_visit",
        "<p>В городе {placeName} есть музеи, исторические кварталы, парки и местные рынки. Выделите день-два, чтобы увидеть главные достопримечательности.</p>",
    ),
    (
        "section.city_info",
        "<p>Город {placeName} — популярное направление с удобным транспортом, большим выбором отелей и множеством ресторанов.</p>",
    ),
    (
        "section.best_time_to_visit",
        "<p>Цены обычно ниже всего в месяц {cheapestMonth}. Весной и осенью в городе {placeName} мягкая погода и меньше туристов.</p>",
    ),
    (
        "section.booking_steps.airline",
        "<ol><li>Укажите города вылета и прилёта в форме поиска.</li><li>Оставьте в результатах только {label}.</li><li>Сравните тарифы, время вылета и нормы багажа.</li><li>Забронируйте выбранный тариф {airlineName} и оплатите билет.</li></ol>",
    ),
    (
        "section.destinations_overview.airline",
        "<p>{airlineName} выполняет рейсы на нескольких континентах из своих главных хабов. Укажите даты, чтобы увидеть все направления {airlineName} в продаже.</p>",
    ),
    (
        "section.places_to_visit.airline",
        "<p>Маршрутная сеть {airlineName} включает столицы, курорты и деловые центры. Изучите направления, чтобы спланировать следующую поездку.</p>",
    ),
    (
        "section.city_info.airline",
        "<p>{airlineName} — международная авиакомпания с регулярными пассажирскими рейсами, стыковками и программой лояльности.</p>",
    ),
    (
        "section.best_time_to_visit.airline",
        "<p>Тарифы {airlineName} обычно ниже всего в месяц {cheapestMonth}, а летом и в праздники билеты дороже.</p>",
    ),
    // --- FAQ ---
    ("faq.price.q", "Сколько стоят {label}?"),
    (
        "faq.price.a",
        "Самый дешёвый найденный тариф — {price}, средняя цена — {avgPrice}.",
    ),
    (
        "faq.price.a_none",
        "Цены меняются каждый день. Укажите даты, чтобы увидеть актуальные тарифы.",
    ),
    ("faq.destinations.q", "Сколько направлений доступно?"),
    (
        "faq.destinations.a",
        "Доступны рейсы по {destinations} направлениям, их выполняют {airlines} авиакомпаний.",
    ),
    (
        "faq.destinations.a_none",
        "Все направления в продаже можно найти через форму поиска.",
    ),
    (
        "faq.cheapest_day.q",
        "В какой день выгоднее всего бронировать {label}?",
    ),
    (
        "faq.cheapest_day.a",
        "По последним ценам самый дешёвый день — {cheapestDay}.",
    ),
    ("faq.best_season.q", "Когда лучше всего путешествовать?"),
    (
        "faq.best_season.a",
        "Самые низкие цены обычно в месяц {cheapestMonth}, а летом и в праздники билеты дороже.",
    ),
    ("faq.booking.q", "Как забронировать {label}?"),
    (
        "faq.booking.a",
        "Укажите даты в форме поиска, сравните предложения и завершите бронирование у выбранного продавца.",
    ),
    // --- Formatting ---
    ("price.format", "{amount} {symbol}"),
    ("weekday.monday", "понедельник"),
    ("weekday.tuesday", "вторник"),
    ("weekday.wednesday", "среда"),
    ("weekday.thursday", "четверг"),
    ("weekday.friday", "пятница"),
    ("weekday.saturday", "суббота"),
    ("weekday.sunday", "воскресенье"),
    ("month.january", "январь"),
    ("month.february", "февраль"),
    ("month.march", "март"),
    ("month.april", "апрель"),
    ("month.may", "май"),
    ("month.june", "июнь"),
    ("month.july", "июль"),
    ("month.august", "август"),
    ("month.september", "сентябрь"),
    ("month.october", "октябрь"),
    ("month.november", "ноябрь"),
    ("month.december", "декабрь"),
];
