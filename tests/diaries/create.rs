use actix_web::{http, test};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{init_app, init_app_with_weather, Connections, StubWeatherProvider};
use common::factory;
use entities::diary;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        weather_provider,
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/create/diary?date=2024-08-28")
        .set_payload("오늘은 날씨가 좋다.")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(test::read_body(res).await.is_empty());

    let diaries_in_db = diary::Entity::find()
        .filter(diary::Column::Date.eq(date(2024, 8, 28)))
        .all(&db)
        .await?;
    assert_eq!(diaries_in_db.len(), 1);
    assert_eq!(diaries_in_db[0].text, "오늘은 날씨가 좋다.");
    assert_eq!(diaries_in_db[0].weather, Some("Clear".to_string()));
    assert_eq!(diaries_in_db[0].icon, Some("01d".to_string()));
    assert_eq!(diaries_in_db[0].temperature, Some(301.2));
    assert_eq!(weather_provider.calls(), 1);

    Ok(())
}

#[actix_web::test]
async fn same_date_can_hold_multiple_diaries() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    for text in ["morning", "evening"] {
        let req = test::TestRequest::post()
            .uri("/create/diary?date=2024-08-28")
            .set_payload(text)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);
    }

    let diaries_in_db = diary::Entity::find()
        .filter(diary::Column::Date.eq(date(2024, 8, 28)))
        .all(&db)
        .await?;
    assert_eq!(diaries_in_db.len(), 2);

    Ok(())
}

#[actix_web::test]
async fn empty_text_is_accepted() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/create/diary?date=2024-08-28")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let diary_in_db = diary::Entity::find().one(&db).await?.unwrap();
    assert_eq!(diary_in_db.text, "");

    Ok(())
}

#[actix_web::test]
async fn far_future_date_is_accepted() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/create/diary?date=3051-01-01")
        .set_payload("먼 미래의 일기.")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let diary_in_db = diary::Entity::find().one(&db).await?.unwrap();
    assert_eq!(diary_in_db.date, date(3051, 1, 1));

    Ok(())
}

mod weather {
    use super::*;

    #[actix_web::test]
    async fn stored_snapshot_is_preferred() -> Result<(), DbErr> {
        let Connections {
            app,
            db,
            weather_provider,
        } = init_app().await?;
        let snapshot = factory::date_weather(date(2024, 8, 28)).insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/create/diary?date=2024-08-28")
            .set_payload("비가 온다.")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let diary_in_db = diary::Entity::find().one(&db).await?.unwrap();
        assert_eq!(diary_in_db.weather, Some(snapshot.weather));
        assert_eq!(diary_in_db.icon, Some(snapshot.icon));
        assert_eq!(diary_in_db.temperature, Some(snapshot.temperature));
        assert_eq!(weather_provider.calls(), 0);

        Ok(())
    }

    #[actix_web::test]
    async fn provider_failure_saves_without_weather() -> Result<(), DbErr> {
        let Connections {
            app,
            db,
            weather_provider,
        } = init_app_with_weather(StubWeatherProvider::failing()).await?;

        let req = test::TestRequest::post()
            .uri("/create/diary?date=2024-08-28")
            .set_payload("날씨를 모르는 날.")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let diary_in_db = diary::Entity::find().one(&db).await?.unwrap();
        assert_eq!(diary_in_db.text, "날씨를 모르는 날.");
        assert_eq!(diary_in_db.weather, None);
        assert_eq!(diary_in_db.icon, None);
        assert_eq!(diary_in_db.temperature, None);
        assert_eq!(weather_provider.calls(), 1);

        Ok(())
    }
}

mod validation_errors {
    use web_adapters::ErrorResponse;

    use super::*;

    #[actix_web::test]
    async fn malformed_date() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/create/diary?date=2024/08/28")
            .set_payload("text")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(res).await;
        assert!(!body.error.is_empty());

        assert!(diary::Entity::find().one(&db).await?.is_none());

        Ok(())
    }

    #[actix_web::test]
    async fn missing_date() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/create/diary")
            .set_payload("text")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }
}
